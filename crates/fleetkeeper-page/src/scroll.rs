//! Header scroll state and smooth-scroll target resolution

use crate::dom::PageDocument;

/// Id of the fixed page header
pub const HEADER_ID: &str = "header";
/// Class the header gains once the page is scrolled
pub const SCROLLED_CLASS: &str = "scrolled";
/// Scroll depth at which the header switches style, in pixels
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
/// Fixed-header allowance subtracted from anchor targets, in pixels
pub const HEADER_OFFSET: f64 = 80.0;

/// Applies the scrolled style to the header, coalescing event bursts
///
/// Scroll events arrive much faster than updates need to happen; callers
/// ask [`request_update`](HeaderScrollState::request_update) whether to
/// schedule an update and deliver the scroll position through
/// [`apply`](HeaderScrollState::apply).
#[derive(Debug, Default)]
pub struct HeaderScrollState {
    ticking: bool,
}

impl HeaderScrollState {
    /// Create an idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the caller should schedule an update for this event
    ///
    /// Returns `false` while an update is already pending, collapsing a
    /// burst of scroll events into a single update.
    pub fn request_update(&mut self) -> bool {
        if self.ticking {
            false
        } else {
            self.ticking = true;
            true
        }
    }

    /// Apply the header style for the given scroll position
    pub fn apply(&mut self, page: &mut PageDocument, scroll_y: f64) {
        if let Some(header) = page.element_mut(HEADER_ID) {
            if scroll_y > HEADER_SCROLL_THRESHOLD {
                header.add_class(SCROLLED_CLASS);
            } else {
                header.remove_class(SCROLLED_CLASS);
            }
        }
        self.ticking = false;
    }
}

/// Resolve an in-page anchor to a scroll target below the fixed header
///
/// A bare `#` and unknown fragments resolve to nothing; the host keeps its
/// default link behavior in that case.
pub fn anchor_scroll_target(page: &PageDocument, href: &str) -> Option<f64> {
    if href == "#" {
        return None;
    }
    let id = href.strip_prefix('#')?;
    let element = page.element(id)?;
    Some(element.offset_top - HEADER_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::PageElement;

    fn page_with_header() -> PageDocument {
        PageDocument::new()
            .with_element(PageElement::new(HEADER_ID))
            .with_element(PageElement::new("pricing").with_offset_top(640.0))
    }

    #[test]
    fn test_header_gains_class_past_threshold() {
        let mut page = page_with_header();
        let mut state = HeaderScrollState::new();

        state.apply(&mut page, 51.0);
        assert!(page.element(HEADER_ID).expect("exists").has_class(SCROLLED_CLASS));

        state.apply(&mut page, 50.0);
        assert!(!page.element(HEADER_ID).expect("exists").has_class(SCROLLED_CLASS));

        state.apply(&mut page, 0.0);
        assert!(!page.element(HEADER_ID).expect("exists").has_class(SCROLLED_CLASS));
    }

    #[test]
    fn test_update_requests_are_coalesced() {
        let mut page = page_with_header();
        let mut state = HeaderScrollState::new();

        assert!(state.request_update());
        // Burst of further scroll events before the update runs
        assert!(!state.request_update());
        assert!(!state.request_update());

        state.apply(&mut page, 120.0);
        // After the update the next event schedules again
        assert!(state.request_update());
    }

    #[test]
    fn test_anchor_target_subtracts_header_offset() {
        let page = page_with_header();

        assert_eq!(anchor_scroll_target(&page, "#pricing"), Some(560.0));
    }

    #[test]
    fn test_bare_and_unknown_anchors_resolve_to_nothing() {
        let page = page_with_header();

        assert_eq!(anchor_scroll_target(&page, "#"), None);
        assert_eq!(anchor_scroll_target(&page, "#missing"), None);
        assert_eq!(anchor_scroll_target(&page, "pricing"), None);
    }
}
