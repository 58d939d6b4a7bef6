//! Translation application over annotated elements
//!
//! Elements opt in to translation through one of three annotation
//! attributes, each naming a dot-separated key. The registry maps every
//! annotation kind to its attribute and its element write-back, so the
//! applicator is a single traversal instead of per-kind duplicated walks.

use crate::dom::{PageDocument, PageElement};
use fleetkeeper_i18n::TranslationDocument;
use tracing::trace;

/// The three element facets a translation can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    /// Text content, annotated with `data-i18n`
    Text,
    /// Placeholder attribute, annotated with `data-i18n-placeholder`
    Placeholder,
    /// Title attribute, annotated with `data-i18n-title`
    Title,
}

/// Every annotation kind, in application order
pub const ANNOTATION_KINDS: [AnnotationKind; 3] = [
    AnnotationKind::Text,
    AnnotationKind::Placeholder,
    AnnotationKind::Title,
];

impl AnnotationKind {
    /// The attribute that carries this kind's translation key
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Text => "data-i18n",
            Self::Placeholder => "data-i18n-placeholder",
            Self::Title => "data-i18n-title",
        }
    }

    /// Write a resolved translation into the element facet this kind controls
    pub fn write(self, element: &mut PageElement, value: &str) {
        match self {
            Self::Text => element.text = value.to_string(),
            Self::Placeholder => element.placeholder = Some(value.to_string()),
            Self::Title => element.title = Some(value.to_string()),
        }
    }
}

/// Re-render every annotated element against the active document
///
/// A key with no entry leaves the element's existing content untouched, and
/// an empty document leaves the whole page untouched. Applying the same
/// document twice produces the same page, so re-running after a language
/// change is always safe.
pub fn apply_translations(page: &mut PageDocument, document: &TranslationDocument) {
    if document.is_empty() {
        return;
    }

    for kind in ANNOTATION_KINDS {
        for element in page.elements_mut() {
            let key = match element.attr(kind.attribute()) {
                Some(key) => key.to_string(),
                None => continue,
            };
            match document.lookup(&key) {
                Some(value) => kind.write(element, value),
                None => trace!("No translation for key '{}', leaving element '{}'", key, element.id),
            }
        }
    }

    if let Some(title) = document.meta_title() {
        page.title = title.to_string();
    }

    // Only overwrite the description when the page has a meta element for it
    if page.meta_description.is_some() {
        if let Some(description) = document.meta_description() {
            page.meta_description = Some(description.to_string());
        }
    }
}
