//! Error types for internationalization operations

use thiserror::Error;

/// Errors that can occur during internationalization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// Requested language code is not in the supported set
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    /// The configured locales base URL could not be parsed
    #[error("Invalid locales base URL: {url}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP client construction failed
    #[error("Failed to build HTTP client")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },

    /// A translation document could not be retrieved
    #[error("Failed to fetch translations for '{language}'")]
    FetchFailed {
        language: String,
        status: Option<u16>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A translation document body could not be parsed
    #[error("Failed to parse translations for '{language}'")]
    ParseFailed {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the persisted language preference failed
    #[error("Preference storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl I18nError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a storage error with source
    pub fn storage_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<I18nError> for fleetkeeper_common::FleetKeeperError {
    fn from(err: I18nError) -> Self {
        match &err {
            I18nError::UnsupportedLanguage(code) => {
                Self::localization_with_language(err.to_string(), code.clone())
            }
            I18nError::FetchFailed { language, .. } | I18nError::ParseFailed { language, .. } => {
                Self::localization_with_language(err.to_string(), language.clone())
            }
            I18nError::Storage { .. } => Self::storage(err.to_string()),
            _ => Self::localization(err.to_string()),
        }
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formatting() {
        let err = I18nError::UnsupportedLanguage("xx".to_string());
        assert_eq!(err.to_string(), "Unsupported language code: xx");

        let err = I18nError::storage("write failed");
        assert_eq!(err.to_string(), "Preference storage error: write failed");
    }

    #[test]
    fn test_conversion_to_common_error() {
        let err: fleetkeeper_common::FleetKeeperError =
            I18nError::UnsupportedLanguage("xx".to_string()).into();
        assert!(err.to_string().contains("Localization error"));

        let err: fleetkeeper_common::FleetKeeperError = I18nError::storage("boom").into();
        assert!(err.to_string().contains("Storage error"));
    }
}
