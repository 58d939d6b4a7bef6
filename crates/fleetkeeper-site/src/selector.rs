//! Language selector binding
//!
//! Hosts forward the selector control's change events into
//! [`Site::change_language`](crate::Site::change_language); after every
//! successful load the control and its companion display element are synced
//! back from engine state. Both elements are optional.

use fleetkeeper_page::PageDocument;

/// Id of the language selection control
pub const LANGUAGE_SELECTOR_ID: &str = "language-selector";
/// Id of the element displaying the current language's name
pub const CURRENT_LANGUAGE_DISPLAY_ID: &str = "current-lang";

/// Reflect the current language into the selector and its display element
pub fn sync_language_selector(page: &mut PageDocument, code: &str, locale_name: Option<&str>) {
    if let Some(selector) = page.element_mut(LANGUAGE_SELECTOR_ID) {
        selector.value = Some(code.to_string());
    }

    if let Some(name) = locale_name {
        if let Some(display) = page.element_mut(CURRENT_LANGUAGE_DISPLAY_ID) {
            display.text = name.to_string();
        }
    }
}
