use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{profile::ProfileValue, username::Username};

/// Local identity record.
///
/// The username is fixed once the account exists; every other attribute lives
/// in `fields` and is mirrored from provider profile data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    username: Username,
    #[serde(default)]
    fields: BTreeMap<String, ProfileValue>,
    date_joined: DateTime<Utc>,
}

impl Account {
    /// A fresh account with no mirrored fields. Stores pass the creation time.
    pub fn new(username: Username, date_joined: DateTime<Utc>) -> Self {
        Self {
            username,
            fields: BTreeMap::new(),
            date_joined,
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<ProfileValue>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn date_joined(&self) -> DateTime<Utc> {
        self.date_joined
    }

    pub fn field(&self, name: &str) -> Option<&ProfileValue> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<ProfileValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &ProfileValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}
