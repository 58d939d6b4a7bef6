//! Startup language resolution
//!
//! Exactly one language is chosen at startup, by strict priority:
//! a `lang` query parameter, then the persisted choice from a previous
//! session, then the host locale's primary subtag, then the default.
//! Invalid or absent sources fall through silently; resolution never fails.

use crate::Language;
use tracing::debug;

/// Resolve the startup language from the available sources
pub fn resolve_language(
    query: Option<&str>,
    stored: Option<&str>,
    host_locale: Option<&str>,
    default: Language,
) -> Language {
    if let Some(language) = query.and_then(Language::from_code) {
        debug!("Language resolved from URL parameter: {}", language);
        return language;
    }

    if let Some(language) = stored.and_then(Language::from_code) {
        debug!("Language resolved from stored preference: {}", language);
        return language;
    }

    if let Some(language) = host_locale.and_then(Language::from_tag) {
        debug!("Language resolved from host locale: {}", language);
        return language;
    }

    debug!("Language resolution fell through to default: {}", default);
    default
}
