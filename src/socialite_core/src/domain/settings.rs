use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::configuration_error::ConfigurationError;

pub const DEFAULT_UUID_LENGTH: usize = 16;

/// Options consumed by the identity pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Length of the random suffix appended when a username collides.
    pub uuid_length: usize,
    pub slugify_usernames: bool,
    /// Fields set at registration and never overwritten on later logins.
    pub protected_user_fields: BTreeSet<String>,
    /// When false, unknown identities are not given an account.
    pub create_users: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            uuid_length: DEFAULT_UUID_LENGTH,
            slugify_usernames: false,
            protected_user_fields: BTreeSet::new(),
            create_users: true,
        }
    }
}

impl PipelineSettings {
    pub fn is_protected(&self, field: &str) -> bool {
        self.protected_user_fields.contains(field)
    }

    /// Checks that a collision retry against `max_length` adds fresh characters.
    pub fn check_entropy(&self, max_length: usize) -> Result<(), ConfigurationError> {
        if self.uuid_length == 0 || max_length <= self.uuid_length {
            return Err(ConfigurationError::InsufficientEntropy {
                max_length,
                uuid_length: self.uuid_length,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PipelineSettings::default();
        assert_eq!(settings.uuid_length, 16);
        assert!(!settings.slugify_usernames);
        assert!(settings.protected_user_fields.is_empty());
        assert!(settings.create_users);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let settings: PipelineSettings = serde_json::from_value(serde_json::json!({
            "protected_user_fields": ["email"],
        }))
        .unwrap();

        assert_eq!(settings.uuid_length, 16);
        assert!(settings.is_protected("email"));
        assert!(!settings.is_protected("first_name"));
    }

    #[test]
    fn test_check_entropy() {
        let settings = PipelineSettings::default();
        assert!(settings.check_entropy(30).is_ok());
        assert_eq!(
            settings.check_entropy(16),
            Err(ConfigurationError::InsufficientEntropy {
                max_length: 16,
                uuid_length: 16,
            })
        );

        let no_suffix = PipelineSettings {
            uuid_length: 0,
            ..PipelineSettings::default()
        };
        assert!(no_suffix.check_entropy(30).is_err());
    }
}
