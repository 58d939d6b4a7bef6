//! Site composition: configuration, engine, and page behaviors wired together

use crate::selector::sync_language_selector;
use fleetkeeper_common::{FleetKeeperError, Result as FleetResult};
use fleetkeeper_config::SiteConfig;
use fleetkeeper_i18n::{
    FilePreferenceStore, HttpTranslationSource, I18nEngine, Language, PreferenceStore,
    TranslationSource,
};
use fleetkeeper_page::{
    anchor_scroll_target, apply_translations, ConsentChoice, ConsentController, CookieStore,
    FaqAccordion, HeaderScrollState, MemoryCookieStore, NavController, PageDocument,
};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// The FleetKeeper site runtime
///
/// Owns the language engine, the page document, and the interaction
/// controllers. Hosts construct it once, call [`start`](Site::start) when
/// the page is ready, and route their events into the `handle_*` methods.
pub struct Site {
    engine: I18nEngine,
    page: Arc<RwLock<PageDocument>>,
    cookies: Arc<dyn CookieStore>,
    header_scroll: Mutex<HeaderScrollState>,
}

impl Site {
    /// Build a site from configuration
    ///
    /// Uses the HTTP translation source and the file-backed preference
    /// store; cookies default to an in-memory jar that embedded hosts can
    /// replace through [`with_components`](Site::with_components).
    pub fn new(config: &SiteConfig, page: PageDocument) -> FleetResult<Self> {
        let default_language =
            Language::from_code(&config.i18n.default_language).ok_or_else(|| {
                FleetKeeperError::config(format!(
                    "Default language '{}' is not supported",
                    config.i18n.default_language
                ))
            })?;

        let source = HttpTranslationSource::new(
            &config.i18n.locales_base_url,
            Duration::from_secs(config.i18n.request_timeout_seconds),
        )?;
        let store = FilePreferenceStore::new(&config.storage.preferences_path);

        Ok(Self::with_components(
            default_language,
            Arc::new(source),
            Arc::new(store),
            Arc::new(MemoryCookieStore::default()),
            page,
        ))
    }

    /// Build a site from explicit components
    pub fn with_components(
        default_language: Language,
        source: Arc<dyn TranslationSource>,
        store: Arc<dyn PreferenceStore>,
        cookies: Arc<dyn CookieStore>,
        page: PageDocument,
    ) -> Self {
        Self {
            engine: I18nEngine::new(default_language, source, store),
            page: Arc::new(RwLock::new(page)),
            cookies,
            header_scroll: Mutex::new(HeaderScrollState::new()),
        }
    }

    /// Run the startup sequence once the page is ready
    ///
    /// Resolves the initial language (query parameter, stored preference,
    /// host locale, default), loads and applies translations, syncs the
    /// selector, and surfaces the consent banner when no choice has been
    /// recorded yet.
    pub async fn start(&self, query_language: Option<&str>) {
        let host_locale = sys_locale::get_locale();
        self.start_with_locale(query_language, host_locale.as_deref())
            .await;
    }

    /// Startup sequence with an explicit host locale
    pub async fn start_with_locale(&self, query_language: Option<&str>, host_locale: Option<&str>) {
        let language = self.engine.initialize(query_language, host_locale).await;
        info!("Site started with language '{}'", language.code());
        self.render_translations();

        if ConsentController::needs_banner(self.cookies.as_ref()) {
            ConsentController::show_banner(&mut self.page.write());
        }
    }

    /// Switch to the language named by `code`; unsupported codes are ignored
    ///
    /// This is both the selector's change handler and the first of the four
    /// exported operations.
    pub async fn change_language(&self, code: &str) {
        self.engine.change_language(code).await;
        self.render_translations();
    }

    /// The current language code
    pub fn current_language(&self) -> &'static str {
        self.engine.current_language().code()
    }

    /// Resolve a translation key against the active document
    pub fn translation(&self, key: &str) -> Option<String> {
        self.engine.translate(key)
    }

    /// All supported language codes, in display order
    pub fn supported_languages(&self) -> Vec<&'static str> {
        Language::all().iter().map(|l| l.code()).collect()
    }

    /// A scroll event arrived; returns whether the host should schedule an
    /// [`apply_scroll`](Site::apply_scroll) update
    pub fn handle_scroll_event(&self) -> bool {
        self.header_scroll.lock().request_update()
    }

    /// Apply the header style for the current scroll position
    pub fn apply_scroll(&self, scroll_y: f64) {
        self.header_scroll
            .lock()
            .apply(&mut self.page.write(), scroll_y);
    }

    /// The hamburger button was pressed
    pub fn handle_nav_toggle(&self) {
        NavController::toggle(&mut self.page.write());
    }

    /// A navigation link was followed
    pub fn handle_nav_link(&self) {
        NavController::handle_link_click(&mut self.page.write());
    }

    /// A click landed on the document; closes the menu when it was outside
    /// the navigation elements
    pub fn handle_document_click(&self, target_within_nav: bool) {
        NavController::handle_document_click(&mut self.page.write(), target_within_nav);
    }

    /// An FAQ question was clicked
    pub fn handle_faq_toggle(&self, item_id: &str) {
        FaqAccordion::toggle(&mut self.page.write(), item_id);
    }

    /// Resolve an in-page anchor to its scroll target
    pub fn resolve_anchor(&self, href: &str) -> Option<f64> {
        anchor_scroll_target(&self.page.read(), href)
    }

    /// The visitor answered the consent banner
    pub fn handle_consent(&self, choice: ConsentChoice) {
        ConsentController::accept(&mut self.page.write(), self.cookies.as_ref(), choice);
    }

    /// Whether analytics may run under the recorded consent
    pub fn analytics_enabled(&self) -> bool {
        ConsentController::analytics_enabled(self.cookies.as_ref())
    }

    /// Run `f` with read access to the page document
    pub fn with_page<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PageDocument) -> R,
    {
        f(&self.page.read())
    }

    /// The language engine, for hosts needing direct access
    pub fn engine(&self) -> &I18nEngine {
        &self.engine
    }

    /// Apply the active document to the page and sync dependent elements
    fn render_translations(&self) {
        let mut page = self.page.write();

        self.engine.with_document(|document| {
            if let Some(document) = document {
                apply_translations(&mut page, document);
            }
        });

        if self.engine.has_document() {
            page.language = Some(self.engine.current_language().code().to_string());
        }

        let locale_name = self.engine.locale_name();
        sync_language_selector(
            &mut page,
            self.engine.current_language().code(),
            locale_name.as_deref(),
        );
    }
}
