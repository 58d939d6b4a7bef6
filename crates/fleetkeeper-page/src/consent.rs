//! Cookie consent banner controller

use crate::cookies::CookieStore;
use crate::dom::PageDocument;
use tracing::debug;

/// Cookie the consent decision is stored under
pub const CONSENT_COOKIE: &str = "cookie_consent";
/// Id of the consent banner element
pub const CONSENT_BANNER_ID: &str = "cookie-consent";
/// Lifetime of the consent decision
pub const CONSENT_LIFETIME_DAYS: i64 = 365;

/// The two consent decisions a visitor can make
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentChoice {
    /// All cookies accepted
    All,
    /// Only essential cookies accepted
    Essential,
}

impl ConsentChoice {
    /// Stored cookie value for this choice
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Essential => "essential",
        }
    }
}

/// Drives the cookie consent banner
pub struct ConsentController;

impl ConsentController {
    /// Whether the visitor still has to make a choice
    pub fn needs_banner(cookies: &dyn CookieStore) -> bool {
        cookies.get(CONSENT_COOKIE).is_none()
    }

    /// Make the banner visible (hosts decide when, typically shortly after
    /// load)
    pub fn show_banner(page: &mut PageDocument) {
        if let Some(banner) = page.element_mut(CONSENT_BANNER_ID) {
            banner.visible = true;
        }
    }

    /// Record the visitor's choice and hide the banner
    pub fn accept(page: &mut PageDocument, cookies: &dyn CookieStore, choice: ConsentChoice) {
        cookies.set(CONSENT_COOKIE, choice.as_str(), CONSENT_LIFETIME_DAYS);
        if let Some(banner) = page.element_mut(CONSENT_BANNER_ID) {
            banner.visible = false;
        }
        debug!("Cookie consent recorded: {}", choice.as_str());
    }

    /// Whether analytics may run; the analytics integration itself is
    /// intentionally not implemented
    pub fn analytics_enabled(cookies: &dyn CookieStore) -> bool {
        cookies
            .get(CONSENT_COOKIE)
            .map(|value| value == ConsentChoice::All.as_str())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::MemoryCookieStore;
    use crate::dom::PageElement;

    fn page_with_banner() -> PageDocument {
        PageDocument::new().with_element(PageElement::new(CONSENT_BANNER_ID).hidden())
    }

    #[test]
    fn test_banner_needed_until_choice_made() {
        let cookies = MemoryCookieStore::default();
        assert!(ConsentController::needs_banner(&cookies));

        let mut page = page_with_banner();
        ConsentController::accept(&mut page, &cookies, ConsentChoice::Essential);

        assert!(!ConsentController::needs_banner(&cookies));
        assert_eq!(cookies.get(CONSENT_COOKIE), Some("essential".to_string()));
    }

    #[test]
    fn test_accept_hides_banner() {
        let cookies = MemoryCookieStore::default();
        let mut page = page_with_banner();

        ConsentController::show_banner(&mut page);
        assert!(page.element(CONSENT_BANNER_ID).expect("exists").visible);

        ConsentController::accept(&mut page, &cookies, ConsentChoice::All);
        assert!(!page.element(CONSENT_BANNER_ID).expect("exists").visible);
    }

    #[test]
    fn test_analytics_gate() {
        let cookies = MemoryCookieStore::default();
        assert!(!ConsentController::analytics_enabled(&cookies));

        let mut page = page_with_banner();
        ConsentController::accept(&mut page, &cookies, ConsentChoice::Essential);
        assert!(!ConsentController::analytics_enabled(&cookies));

        ConsentController::accept(&mut page, &cookies, ConsentChoice::All);
        assert!(ConsentController::analytics_enabled(&cookies));
    }

    #[test]
    fn test_missing_banner_element_is_a_no_op() {
        let cookies = MemoryCookieStore::default();
        let mut page = PageDocument::new();

        ConsentController::show_banner(&mut page);
        ConsentController::accept(&mut page, &cookies, ConsentChoice::All);

        assert_eq!(cookies.get(CONSENT_COOKIE), Some("all".to_string()));
    }
}
