//! Internationalization for the FleetKeeper site runtime
//!
//! This crate carries the language machinery of the FleetKeeper website:
//!
//! - Startup language resolution (URL parameter, persisted choice, host
//!   locale, default)
//! - Translation document loading over HTTP with a single bounded fallback
//!   to the default language
//! - Dot-separated key lookup against nested JSON documents
//! - An owned language engine whose request token supersedes overlapping
//!   loads
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use fleetkeeper_i18n::{
//!     I18nEngine, I18nResult, Language, MemoryPreferenceStore, TranslationDocument,
//!     TranslationSource,
//! };
//!
//! struct EmbeddedSource;
//!
//! #[async_trait]
//! impl TranslationSource for EmbeddedSource {
//!     async fn fetch(&self, language: Language) -> I18nResult<TranslationDocument> {
//!         let body = format!(r#"{{"langName":"{}"}}"#, language.code());
//!         Ok(serde_json::from_str(&body).expect("static document parses"))
//!     }
//! }
//!
//! # async fn example() {
//! let engine = I18nEngine::new(
//!     Language::English,
//!     Arc::new(EmbeddedSource),
//!     Arc::new(MemoryPreferenceStore::default()),
//! );
//!
//! let language = engine.initialize(None, Some("de-DE")).await;
//! assert_eq!(language, Language::German);
//! # }
//! ```

pub mod document;
pub mod engine;
pub mod error;
pub mod language;
pub mod resolver;
pub mod source;
pub mod store;

pub use document::TranslationDocument;
pub use engine::I18nEngine;
pub use error::{I18nError, I18nResult};
pub use language::Language;
pub use resolver::resolve_language;
pub use source::{HttpTranslationSource, TranslationSource};
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
