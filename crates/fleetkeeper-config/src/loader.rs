//! Configuration loading utilities

use crate::SiteConfig;
use fleetkeeper_common::Result as FleetResult;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for fleetkeeper_common::FleetKeeperError {
    fn from(err: ConfigError) -> Self {
        fleetkeeper_common::FleetKeeperError::config(err.to_string())
    }
}

/// Configuration loader for the site runtime
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SiteConfig, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;

        config.validate_all().map_err(ConfigError::ValidationError)?;

        debug!("Configuration loaded from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load configuration from environment variables and well-known files
    pub fn load() -> FleetResult<SiteConfig> {
        let config = if let Ok(config_path) = env::var("FLEETKEEPER_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("fleetkeeper.yaml").exists() {
            Self::load_config("fleetkeeper.yaml")?
        } else if Path::new("fleetkeeper.yml").exists() {
            Self::load_config("fleetkeeper.yml")?
        } else {
            // No config file found, use defaults with env overrides
            let mut config = SiteConfig::default();
            Self::apply_env_overrides(&mut config)?;
            config.validate_all().map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FleetResult<SiteConfig> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut SiteConfig) -> Result<(), ConfigError> {
        // I18n configuration overrides
        if let Ok(language) = env::var("FLEETKEEPER_DEFAULT_LANGUAGE") {
            config.i18n.default_language = language;
        }

        if let Ok(url) = env::var("FLEETKEEPER_LOCALES_URL") {
            config.i18n.locales_base_url = url;
        }

        if let Ok(timeout) = env::var("FLEETKEEPER_REQUEST_TIMEOUT") {
            config.i18n.request_timeout_seconds =
                timeout.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "FLEETKEEPER_REQUEST_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        // Storage configuration overrides
        if let Ok(path) = env::var("FLEETKEEPER_PREFERENCES_PATH") {
            config.storage.preferences_path = path;
        }

        // Logging configuration overrides
        if let Ok(level) = env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.logging.file = Some(file);
        }

        if let Ok(colored) = env::var("LOG_COLORED") {
            config.logging.colored = colored.parse().map_err(|e| ConfigError::EnvParseError {
                var: "LOG_COLORED".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(compact) = env::var("LOG_COMPACT") {
            config.logging.compact = compact.parse().map_err(|e| ConfigError::EnvParseError {
                var: "LOG_COMPACT".to_string(),
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::NamedTempFile;

    /// Tests mutate process-wide environment variables; serialize them
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create a temporary YAML config file for testing
    fn create_test_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file
    }

    fn clear_env_overrides() {
        env::remove_var("FLEETKEEPER_DEFAULT_LANGUAGE");
        env::remove_var("FLEETKEEPER_LOCALES_URL");
        env::remove_var("FLEETKEEPER_REQUEST_TIMEOUT");
        env::remove_var("FLEETKEEPER_PREFERENCES_PATH");
        env::remove_var("LOG_LEVEL");
        env::remove_var("LOG_FILE");
        env::remove_var("LOG_COLORED");
        env::remove_var("LOG_COMPACT");
    }

    #[test]
    fn test_load_valid_yaml_config() {
        let _guard = env_guard();
        clear_env_overrides();

        let yaml_content = "i18n:\n  default_language: \"ro\"\n  locales_base_url: \"https://fleetkeeper.example.com\"\n  request_timeout_seconds: 15\nstorage:\n  preferences_path: \"/tmp/fleetkeeper-prefs.json\"\nlogging:\n  level: \"debug\"\n  compact: false\n  colored: true\n  file: ~\n  include_targets: true";

        let temp_file = create_test_config_file(yaml_content);
        let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");

        assert_eq!(config.i18n.default_language, "ro");
        assert_eq!(config.i18n.locales_base_url, "https://fleetkeeper.example.com");
        assert_eq!(config.i18n.request_timeout_seconds, 15);
        assert_eq!(config.storage.preferences_path, "/tmp/fleetkeeper-prefs.json");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let _guard = env_guard();
        clear_env_overrides();

        let yaml_content = "i18n:\n  default_language: \"de\"";

        let temp_file = create_test_config_file(yaml_content);
        let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");

        assert_eq!(config.i18n.default_language, "de");
        // Unspecified sections fall back to defaults
        assert_eq!(config.i18n.request_timeout_seconds, 30);
        assert_eq!(config.storage.preferences_path, "fleetkeeper-preferences.json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_yaml() {
        let _guard = env_guard();
        clear_env_overrides();

        let invalid_yaml = "i18n:\n  default_language: [unclosed array";

        let temp_file = create_test_config_file(invalid_yaml);
        let result = ConfigLoader::load_config(temp_file.path());

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_error() {
        let _guard = env_guard();
        clear_env_overrides();

        let invalid_config = "i18n:\n  default_language: \"english\"\n  locales_base_url: \"https://fleetkeeper.example.com\"\n  request_timeout_seconds: 30";

        let temp_file = create_test_config_file(invalid_config);
        let result = ConfigLoader::load_config(temp_file.path());

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_environment_variable_overrides() {
        let _guard = env_guard();
        clear_env_overrides();
        env::set_var("FLEETKEEPER_DEFAULT_LANGUAGE", "fr");
        env::set_var("FLEETKEEPER_LOCALES_URL", "https://env.fleetkeeper.example.com");
        env::set_var("FLEETKEEPER_REQUEST_TIMEOUT", "45");
        env::set_var("LOG_LEVEL", "trace");

        let yaml_content = "i18n:\n  default_language: \"en\"\n  locales_base_url: \"https://original.fleetkeeper.example.com\"\n  request_timeout_seconds: 30";

        let temp_file = create_test_config_file(yaml_content);
        let config = ConfigLoader::load_config(temp_file.path()).expect("Failed to load config");

        // Environment variables should override YAML values
        assert_eq!(config.i18n.default_language, "fr");
        assert_eq!(config.i18n.locales_base_url, "https://env.fleetkeeper.example.com");
        assert_eq!(config.i18n.request_timeout_seconds, 45);
        assert_eq!(config.logging.level, "trace");

        clear_env_overrides();
    }

    #[test]
    fn test_env_parse_error() {
        let _guard = env_guard();
        clear_env_overrides();
        env::set_var("FLEETKEEPER_REQUEST_TIMEOUT", "not_a_number");

        let yaml_content = "i18n:\n  default_language: \"en\"";

        let temp_file = create_test_config_file(yaml_content);
        let result = ConfigLoader::load_config(temp_file.path());

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::EnvParseError { .. }));

        clear_env_overrides();
    }

    #[test]
    fn test_missing_config_file() {
        let _guard = env_guard();
        let result = ConfigLoader::load_config("/nonexistent/path/fleetkeeper.yaml");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }
}
