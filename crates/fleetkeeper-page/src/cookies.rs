//! Cookie access boundary and formatting helpers

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Read/write access to the host's cookies
pub trait CookieStore: Send + Sync {
    /// Read a cookie value by name
    fn get(&self, name: &str) -> Option<String>;

    /// Write a cookie with the given lifetime in days
    fn set(&self, name: &str, value: &str, max_age_days: i64);
}

/// Format a Set-Cookie string the way the site writes cookies
pub fn format_set_cookie(
    name: &str,
    value: &str,
    max_age_days: i64,
    now: DateTime<Utc>,
) -> String {
    let expires = now + Duration::days(max_age_days);
    format!(
        "{}={};expires={};path=/;SameSite=Lax",
        name,
        value,
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

/// Extract a named cookie from a `Cookie:`-style header string
pub fn parse_cookie_header(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|part| part.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// In-memory cookie store for tests and embedded hosts
#[derive(Default)]
pub struct MemoryCookieStore {
    cookies: RwLock<HashMap<String, String>>,
}

impl MemoryCookieStore {
    /// Create a store pre-populated with a cookie
    pub fn with_cookie(name: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(name, value, 1);
        store
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.read().get(name).cloned()
    }

    fn set(&self, name: &str, value: &str, _max_age_days: i64) {
        self.cookies
            .write()
            .insert(name.to_string(), value.to_string());
    }
}
