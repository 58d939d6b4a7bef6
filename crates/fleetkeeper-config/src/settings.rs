//! Application configuration structures

use fleetkeeper_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Main configuration for the site runtime
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Internationalization settings
    pub i18n: I18nSettings,

    /// Preference storage settings
    pub storage: StorageSettings,

    /// Logging configuration
    pub logging: LoggingSettings,
}

impl SiteConfig {
    /// Validate the configuration and every nested section
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()?;
        self.i18n.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Internationalization settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct I18nSettings {
    /// Language code used when no other source resolves (ISO 639-1)
    #[validate(custom(function = "crate::validation::validate_language_code", message = "Default language must be a supported ISO 639-1 code"))]
    pub default_language: String,

    /// Base URL the per-language translation documents are fetched from
    #[validate(url(message = "Locales base URL must be a valid URL"))]
    pub locales_base_url: String,

    /// Request timeout in seconds for translation fetches
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub request_timeout_seconds: u64,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            locales_base_url: "https://fleetkeeper.app".to_string(),
            request_timeout_seconds: 30,
        }
    }
}

/// Preference storage settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StorageSettings {
    /// File the last applied language choice is persisted to
    #[validate(length(min = 1, message = "Preferences path cannot be empty"))]
    #[validate(custom(function = "crate::validation::validate_file_path", message = "Invalid preferences path"))]
    pub preferences_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            preferences_path: "fleetkeeper-preferences.json".to_string(),
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub level: String,

    /// Compact single-line output
    pub compact: bool,

    /// Colorized terminal output
    pub colored: bool,

    /// Optional log file path
    pub file: Option<String>,

    /// Include target module information
    pub include_targets: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            compact: false,
            colored: true,
            file: None,
            include_targets: true,
        }
    }
}

impl From<LoggingSettings> for LoggingConfig {
    fn from(settings: LoggingSettings) -> Self {
        Self {
            level: settings.level,
            compact: settings.compact,
            colored: settings.colored,
            file_path: settings.file,
            include_targets: settings.include_targets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate_all().is_ok());
        assert_eq!(config.i18n.default_language, "en");
        assert_eq!(config.i18n.request_timeout_seconds, 30);
    }

    #[test]
    fn test_invalid_default_language_rejected() {
        let mut config = SiteConfig::default();
        config.i18n.default_language = "english".to_string();
        assert!(config.validate_all().is_err());

        config.i18n.default_language = "EN".to_string();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = SiteConfig::default();
        config.i18n.locales_base_url = "not a url".to_string();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = SiteConfig::default();
        config.i18n.request_timeout_seconds = 0;
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_logging_settings_conversion() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            compact: true,
            colored: false,
            file: Some("site.log".to_string()),
            include_targets: false,
        };
        let config: LoggingConfig = settings.into();
        assert_eq!(config.level, "debug");
        assert!(config.compact);
        assert!(!config.colored);
        assert_eq!(config.file_path.as_deref(), Some("site.log"));
        assert!(!config.include_targets);
    }
}
