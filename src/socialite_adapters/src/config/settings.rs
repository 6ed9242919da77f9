use config::{Config, Environment, File};
use socialite_core::PipelineSettings;

use super::{SETTINGS_FILE, env::ENV_PREFIX};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] config::ConfigError),
}

/// Load pipeline settings from `config/social_auth.*` and `SOCIAL_AUTH_*`
/// environment variables, reading `.env` first when present.
#[tracing::instrument(name = "load_settings")]
pub fn load_settings() -> Result<PipelineSettings, SettingsError> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }
    from_sources(Some(SETTINGS_FILE), None)
}

/// Build settings from an optional file and an environment.
///
/// `env` replaces the process environment when given. Environment values win
/// over the file, which wins over the defaults.
pub fn from_sources(
    file: Option<&str>,
    env: Option<config::Map<String, String>>,
) -> Result<PipelineSettings, SettingsError> {
    let mut builder = Config::builder();
    if let Some(file) = file {
        builder = builder.add_source(File::with_name(file).required(false));
    }

    let environment = Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("protected_user_fields")
        .source(env);

    let settings = builder
        .add_source(environment)
        .build()?
        .try_deserialize::<PipelineSettings>()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::*;

    fn env(vars: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            vars.iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = from_sources(None, env(&[])).unwrap();
        assert_eq!(settings, PipelineSettings::default());
    }

    #[test]
    fn test_environment_overrides() {
        let settings = from_sources(
            None,
            env(&[
                (UUID_LENGTH_ENV_VAR, "8"),
                (SLUGIFY_USERNAMES_ENV_VAR, "true"),
                (PROTECTED_USER_FIELDS_ENV_VAR, "email,first_name"),
                (CREATE_USERS_ENV_VAR, "false"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.uuid_length, 8);
        assert!(settings.slugify_usernames);
        assert!(settings.is_protected("email"));
        assert!(settings.is_protected("first_name"));
        assert!(!settings.is_protected("last_name"));
        assert!(!settings.create_users);
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let settings = from_sources(None, env(&[("PATH", "/usr/bin"), ("SOCIAL_AUTH_OTHER", "x")]))
            .unwrap();
        assert_eq!(settings, PipelineSettings::default());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let result = from_sources(None, env(&[(UUID_LENGTH_ENV_VAR, "sixteen")]));
        assert!(matches!(result, Err(SettingsError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let settings = from_sources(Some("config/does_not_exist"), env(&[])).unwrap();
        assert_eq!(settings.uuid_length, 16);
    }
}
