//! FAQ accordion controller

use crate::dom::{PageDocument, ACTIVE_CLASS};

/// Class shared by every accordion item
pub const FAQ_ITEM_CLASS: &str = "faq-item";

/// Single-open FAQ accordion
pub struct FaqAccordion;

impl FaqAccordion {
    /// Toggle one item; every other open item closes
    pub fn toggle(page: &mut PageDocument, item_id: &str) {
        let items = page.ids_with_class(FAQ_ITEM_CLASS);
        if !items.iter().any(|id| id == item_id) {
            return;
        }

        for id in &items {
            if id != item_id {
                if let Some(other) = page.element_mut(id) {
                    other.remove_class(ACTIVE_CLASS);
                }
            }
        }

        if let Some(item) = page.element_mut(item_id) {
            item.toggle_class(ACTIVE_CLASS);
        }
    }

    /// Id of the currently open item, if any
    pub fn open_item(page: &PageDocument) -> Option<String> {
        page.elements()
            .iter()
            .find(|e| e.has_class(FAQ_ITEM_CLASS) && e.has_class(ACTIVE_CLASS))
            .map(|e| e.id.clone())
    }
}
