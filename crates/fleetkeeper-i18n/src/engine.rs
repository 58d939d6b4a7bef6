//! Language engine: the owned state container for the i18n system
//!
//! Holds the current language, the active translation document, and the
//! request token that orders overlapping loads. All dependent components
//! receive the engine by reference; there is no ambient global state.

use crate::resolver::resolve_language;
use crate::source::TranslationSource;
use crate::store::PreferenceStore;
use crate::{Language, TranslationDocument};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug)]
struct EngineState {
    current: Language,
    document: Option<TranslationDocument>,
    /// Token of the most recently started load; completions carrying an
    /// older token are discarded
    latest_token: u64,
}

/// Language selection and translation loading engine
///
/// Cloning is cheap and shares the same underlying state, mirroring how the
/// original script exposed a single process-wide language context.
#[derive(Clone)]
pub struct I18nEngine {
    default_language: Language,
    state: Arc<RwLock<EngineState>>,
    source: Arc<dyn TranslationSource>,
    store: Arc<dyn PreferenceStore>,
}

impl I18nEngine {
    /// Create an engine with no document loaded yet
    pub fn new(
        default_language: Language,
        source: Arc<dyn TranslationSource>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            default_language,
            state: Arc::new(RwLock::new(EngineState {
                current: default_language,
                document: None,
                latest_token: 0,
            })),
            source,
            store,
        }
    }

    /// Resolve the startup language and load its translations
    ///
    /// Resolution priority: `query_language`, then the persisted choice,
    /// then the host locale's primary subtag, then the default. Returns the
    /// language that actually ended up current (which differs from the
    /// resolved one when the load fell back to the default).
    pub async fn initialize(
        &self,
        query_language: Option<&str>,
        host_locale: Option<&str>,
    ) -> Language {
        let stored = match self.store.load_language() {
            Ok(stored) => stored,
            Err(err) => {
                warn!("Failed to read persisted language preference: {}", err);
                None
            }
        };

        let resolved = resolve_language(
            query_language,
            stored.as_deref(),
            host_locale,
            self.default_language,
        );
        self.load(resolved).await;
        self.current_language()
    }

    /// Switch to the language named by `code`
    ///
    /// An unsupported code is silently ignored; this is the entry point for
    /// user-driven selection, which bypasses startup resolution entirely.
    pub async fn change_language(&self, code: &str) {
        match Language::from_code(code) {
            Some(language) => self.set_language(language).await,
            None => debug!("Ignoring unsupported language code: {}", code),
        }
    }

    /// Switch to `language`, loading and activating its translations
    pub async fn set_language(&self, language: Language) {
        self.load(language).await;
    }

    /// The language currently in effect
    pub fn current_language(&self) -> Language {
        self.state.read().current
    }

    /// The configured fallback language
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// All supported languages
    pub fn supported_languages(&self) -> &'static [Language] {
        Language::all()
    }

    /// Resolve a translation key against the active document
    pub fn translate(&self, key: &str) -> Option<String> {
        let state = self.state.read();
        state
            .document
            .as_ref()
            .and_then(|doc| doc.lookup(key))
            .map(str::to_string)
    }

    /// The active document's locale display name
    pub fn locale_name(&self) -> Option<String> {
        let state = self.state.read();
        state
            .document
            .as_ref()
            .and_then(TranslationDocument::locale_name)
            .map(str::to_string)
    }

    /// Whether any document has been successfully loaded
    pub fn has_document(&self) -> bool {
        self.state.read().document.is_some()
    }

    /// Run `f` with read access to the active document
    pub fn with_document<F, R>(&self, f: F) -> R
    where
        F: FnOnce(Option<&TranslationDocument>) -> R,
    {
        let state = self.state.read();
        f(state.document.as_ref())
    }

    /// Load translations for `language`, falling back to the default once
    ///
    /// Failures never propagate: a failed non-default load triggers exactly
    /// one follow-up fetch of the default language, and if that also fails
    /// the previously active document is retained. The lock is never held
    /// across an await.
    async fn load(&self, language: Language) {
        let token = {
            let mut state = self.state.write();
            state.latest_token += 1;
            state.latest_token
        };

        match self.source.fetch(language).await {
            Ok(document) => {
                self.commit(token, language, document);
            }
            Err(err) => {
                warn!(
                    "Failed to load translations for '{}': {}",
                    language.code(),
                    err
                );
                if language != self.default_language {
                    match self.source.fetch(self.default_language).await {
                        Ok(document) => {
                            self.commit(token, self.default_language, document);
                        }
                        Err(fallback_err) => {
                            warn!(
                                "Fallback to default language '{}' also failed: {}",
                                self.default_language.code(),
                                fallback_err
                            );
                        }
                    }
                }
            }
        }
    }

    /// Activate a loaded document unless a newer load has started since
    fn commit(&self, token: u64, language: Language, document: TranslationDocument) -> bool {
        {
            let mut state = self.state.write();
            if token != state.latest_token {
                debug!(
                    "Discarding superseded translation load for '{}'",
                    language.code()
                );
                return false;
            }
            state.current = language;
            state.document = Some(document);
        }

        info!("Activated translations for '{}'", language.code());

        if let Err(err) = self.store.save_language(language.code()) {
            warn!(
                "Failed to persist language preference '{}': {}",
                language.code(),
                err
            );
        }
        true
    }
}
