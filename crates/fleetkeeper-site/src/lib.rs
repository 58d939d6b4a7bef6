//! FleetKeeper site runtime composition
//!
//! Wires the configuration layer, the language engine, and the page
//! behaviors into a single [`Site`] a host embeds. Four operations form the
//! public surface the hosting page uses: [`Site::change_language`],
//! [`Site::current_language`], [`Site::translation`], and
//! [`Site::supported_languages`]; everything else is event plumbing.

pub mod selector;
pub mod site;

pub use selector::{
    sync_language_selector, CURRENT_LANGUAGE_DISPLAY_ID, LANGUAGE_SELECTOR_ID,
};
pub use site::Site;
