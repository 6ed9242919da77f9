pub mod settings;

pub use settings::{SettingsError, from_sources, load_settings};

pub mod env {
    pub const ENV_PREFIX: &str = "SOCIAL_AUTH";
    pub const UUID_LENGTH_ENV_VAR: &str = "SOCIAL_AUTH_UUID_LENGTH";
    pub const SLUGIFY_USERNAMES_ENV_VAR: &str = "SOCIAL_AUTH_SLUGIFY_USERNAMES";
    pub const PROTECTED_USER_FIELDS_ENV_VAR: &str = "SOCIAL_AUTH_PROTECTED_USER_FIELDS";
    pub const CREATE_USERS_ENV_VAR: &str = "SOCIAL_AUTH_CREATE_USERS";
}

/// Settings file, without extension, looked up relative to the working directory.
pub const SETTINGS_FILE: &str = "config/social_auth";
