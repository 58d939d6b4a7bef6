//! Page model and interaction behaviors for the FleetKeeper site runtime
//!
//! The browser DOM the original script manipulated is abstracted as an
//! in-memory [`PageDocument`]; hosts populate it from their markup and
//! render from it. On top of the model sit the translation applicator and
//! the page controllers: mobile navigation, cookie consent, the FAQ
//! accordion, and scroll behaviors.

pub mod annotation;
pub mod consent;
pub mod cookies;
pub mod dom;
pub mod faq;
pub mod nav;
pub mod scroll;

pub use annotation::{apply_translations, AnnotationKind, ANNOTATION_KINDS};
pub use consent::{ConsentChoice, ConsentController, CONSENT_BANNER_ID, CONSENT_COOKIE};
pub use cookies::{format_set_cookie, parse_cookie_header, CookieStore, MemoryCookieStore};
pub use dom::{PageDocument, PageElement, ACTIVE_CLASS};
pub use faq::{FaqAccordion, FAQ_ITEM_CLASS};
pub use nav::{NavController, NAV_MENU_ID, NAV_TOGGLE_ID};
pub use scroll::{
    anchor_scroll_target, HeaderScrollState, HEADER_ID, HEADER_OFFSET, HEADER_SCROLL_THRESHOLD,
    SCROLLED_CLASS,
};
