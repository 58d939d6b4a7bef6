//! Mobile navigation controller

use crate::dom::{PageDocument, ACTIVE_CLASS};
use tracing::trace;

/// Id of the hamburger toggle button
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
/// Id of the navigation menu container
pub const NAV_MENU_ID: &str = "nav-menu";

/// Drives the mobile navigation menu
///
/// The toggle button and the menu carry the `active` class together; body
/// scrolling is locked while the menu is open. When either element is
/// missing the controller does nothing.
pub struct NavController;

impl NavController {
    /// Toggle the menu open or closed
    pub fn toggle(page: &mut PageDocument) {
        if page.element(NAV_TOGGLE_ID).is_none() || page.element(NAV_MENU_ID).is_none() {
            return;
        }

        let open = page
            .element_mut(NAV_MENU_ID)
            .map(|menu| menu.toggle_class(ACTIVE_CLASS))
            .unwrap_or(false);

        if let Some(toggle) = page.element_mut(NAV_TOGGLE_ID) {
            if open {
                toggle.add_class(ACTIVE_CLASS);
            } else {
                toggle.remove_class(ACTIVE_CLASS);
            }
        }

        page.body_scroll_locked = open;
        trace!("Navigation menu {}", if open { "opened" } else { "closed" });
    }

    /// Close the menu and release the scroll lock
    pub fn close(page: &mut PageDocument) {
        if let Some(toggle) = page.element_mut(NAV_TOGGLE_ID) {
            toggle.remove_class(ACTIVE_CLASS);
        }
        if let Some(menu) = page.element_mut(NAV_MENU_ID) {
            menu.remove_class(ACTIVE_CLASS);
        }
        page.body_scroll_locked = false;
    }

    /// A navigation link was followed; the menu closes
    pub fn handle_link_click(page: &mut PageDocument) {
        Self::close(page);
    }

    /// A click landed somewhere on the document; close unless it was inside
    /// the menu or the toggle
    pub fn handle_document_click(page: &mut PageDocument, target_within_nav: bool) {
        if !target_within_nav {
            Self::close(page);
        }
    }

    /// Whether the menu is currently open
    pub fn is_open(page: &PageDocument) -> bool {
        page.element(NAV_MENU_ID)
            .map(|menu| menu.has_class(ACTIVE_CLASS))
            .unwrap_or(false)
    }
}
