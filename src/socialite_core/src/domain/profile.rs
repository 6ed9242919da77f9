use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Key under which providers supply the preferred username.
pub const USERNAME_FIELD: &str = "username";
pub const ID_FIELD: &str = "id";
pub const PK_FIELD: &str = "pk";
pub const EMAIL_FIELD: &str = "email";

/// Keys that are never copied from provider details onto an account.
pub const RESERVED_FIELDS: [&str; 3] = [USERNAME_FIELD, ID_FIELD, PK_FIELD];

/// A scalar value reported by an identity provider.
///
/// Numbers compare by value across variants: `30` equals `30.0` and `true`
/// equals `1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ProfileValue {
    /// Blank values (null, `false`, zero, empty text) never overwrite account fields.
    pub fn is_blank(&self) -> bool {
        match self {
            ProfileValue::Null => true,
            ProfileValue::Bool(value) => !value,
            ProfileValue::Integer(value) => *value == 0,
            ProfileValue::Float(value) => *value == 0.0,
            ProfileValue::Text(value) => value.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ProfileValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl PartialEq for ProfileValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ProfileValue::Null, ProfileValue::Null) => true,
            (ProfileValue::Text(left), ProfileValue::Text(right)) => left == right,
            (ProfileValue::Float(left), ProfileValue::Float(right)) => left == right,
            (ProfileValue::Float(float), other) | (other, ProfileValue::Float(float)) => {
                other.as_integer().is_some_and(|int| int_eq_float(int, *float))
            }
            (left, right) => match (left.as_integer(), right.as_integer()) {
                (Some(left), Some(right)) => left == right,
                _ => false,
            },
        }
    }
}

impl ProfileValue {
    fn as_integer(&self) -> Option<i64> {
        match self {
            ProfileValue::Bool(value) => Some(i64::from(*value)),
            ProfileValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

fn int_eq_float(int: i64, float: f64) -> bool {
    // i64 range is [-2^63, 2^63); anything outside cannot match.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    float.fract() == 0.0 && (-BOUND..BOUND).contains(&float) && float as i64 == int
}

impl fmt::Display for ProfileValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileValue::Null => Ok(()),
            ProfileValue::Bool(value) => write!(f, "{value}"),
            ProfileValue::Integer(value) => write!(f, "{value}"),
            ProfileValue::Float(value) => write!(f, "{value}"),
            ProfileValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for ProfileValue {
    fn from(value: &str) -> Self {
        ProfileValue::Text(value.to_owned())
    }
}

impl From<String> for ProfileValue {
    fn from(value: String) -> Self {
        ProfileValue::Text(value)
    }
}

impl From<bool> for ProfileValue {
    fn from(value: bool) -> Self {
        ProfileValue::Bool(value)
    }
}

impl From<i64> for ProfileValue {
    fn from(value: i64) -> Self {
        ProfileValue::Integer(value)
    }
}

impl From<f64> for ProfileValue {
    fn from(value: f64) -> Self {
        ProfileValue::Float(value)
    }
}

/// Profile fields supplied by a provider after authentication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileData(BTreeMap<String, ProfileValue>);

impl ProfileData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ProfileValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ProfileValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ProfileValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProfileValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The provider's preferred username, coerced to text, if present and not blank.
    pub fn preferred_username(&self) -> Option<String> {
        self.non_blank_text(USERNAME_FIELD)
    }

    pub fn email(&self) -> Option<String> {
        self.non_blank_text(EMAIL_FIELD)
    }

    fn non_blank_text(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|value| !value.is_blank())
            .map(ToString::to_string)
    }
}

impl<K, V> FromIterator<(K, V)> for ProfileData
where
    K: Into<String>,
    V: Into<ProfileValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
