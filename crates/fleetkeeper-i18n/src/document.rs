//! Translation document model
//!
//! A translation document is the parsed body of a per-language
//! `locales/{lang}.json` resource: nested string-keyed mappings with string
//! leaves, addressed by dot-separated keys. Two top-level fields are
//! reserved: `langName` (the locale's display name) and `meta` (document
//! `title` and `description`).

use serde::Deserialize;
use serde_json::{Map, Value};

/// Display name field at the document root
const LANG_NAME_FIELD: &str = "langName";
/// Reserved document-metadata object at the document root
const META_FIELD: &str = "meta";

/// A complete, successfully parsed per-language translation document
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TranslationDocument {
    root: Map<String, Value>,
}

impl TranslationDocument {
    /// Wrap an already-parsed JSON object
    pub fn new(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Whether the document contains no entries at all
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Resolve a dot-separated key by descending one segment at a time
    ///
    /// Returns `None` when any segment is absent or the addressed value is
    /// not a string leaf.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut current: Option<&Value> = None;
        for segment in key.split('.') {
            current = match current {
                None => self.root.get(segment),
                Some(Value::Object(map)) => map.get(segment),
                Some(_) => return None,
            };
            if current.is_none() {
                return None;
            }
        }
        current.and_then(Value::as_str)
    }

    /// The locale's display name, when the document provides one
    pub fn locale_name(&self) -> Option<&str> {
        self.root.get(LANG_NAME_FIELD).and_then(Value::as_str)
    }

    /// The document title from the reserved `meta` object
    pub fn meta_title(&self) -> Option<&str> {
        self.meta_field("title")
    }

    /// The document description from the reserved `meta` object
    pub fn meta_description(&self) -> Option<&str> {
        self.meta_field("description")
    }

    fn meta_field(&self, field: &str) -> Option<&str> {
        self.root
            .get(META_FIELD)
            .and_then(Value::as_object)
            .and_then(|meta| meta.get(field))
            .and_then(Value::as_str)
    }
}
