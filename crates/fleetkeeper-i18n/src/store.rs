//! Persistence of the last applied language choice
//!
//! The browser original kept this in `localStorage` under a single fixed
//! key; here the boundary is a trait so hosts can plug in whatever storage
//! they have. The file-backed implementation writes a small JSON document.

use crate::error::{I18nError, I18nResult};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the last successfully applied language code
pub trait PreferenceStore: Send + Sync {
    /// Read the persisted language code, if any
    fn load_language(&self) -> I18nResult<Option<String>>;

    /// Persist a language code for future sessions
    fn save_language(&self, code: &str) -> I18nResult<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreferences {
    language: String,
}

/// File-backed preference store
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store persisting to `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_language(&self) -> I18nResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            I18nError::storage_with_source(
                format!("Failed to read preferences from {}", self.path.display()),
                e,
            )
        })?;

        let preferences: StoredPreferences = serde_json::from_str(&content).map_err(|e| {
            I18nError::storage_with_source(
                format!("Malformed preferences file {}", self.path.display()),
                e,
            )
        })?;

        Ok(Some(preferences.language))
    }

    fn save_language(&self, code: &str) -> I18nResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    I18nError::storage_with_source(
                        format!("Failed to create preference directory {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let preferences = StoredPreferences {
            language: code.to_string(),
        };
        let content = serde_json::to_string_pretty(&preferences)
            .map_err(|e| I18nError::storage_with_source("Failed to encode preferences", e))?;

        std::fs::write(&self.path, content).map_err(|e| {
            I18nError::storage_with_source(
                format!("Failed to write preferences to {}", self.path.display()),
                e,
            )
        })?;

        debug!("Persisted language preference '{}'", code);
        Ok(())
    }
}

/// In-memory preference store for tests and embedded hosts
#[derive(Default)]
pub struct MemoryPreferenceStore {
    language: RwLock<Option<String>>,
}

impl MemoryPreferenceStore {
    /// Create a store pre-populated with a language code
    pub fn with_language(code: &str) -> Self {
        Self {
            language: RwLock::new(Some(code.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_language(&self) -> I18nResult<Option<String>> {
        Ok(self.language.read().clone())
    }

    fn save_language(&self, code: &str) -> I18nResult<()> {
        *self.language.write() = Some(code.to_string());
        Ok(())
    }
}
