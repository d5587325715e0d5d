use cookie::Cookie;
use std::sync::{Arc, RwLock};

/// Name of the cookie the OAuth service stores the session JWT in
pub const SESSION_COOKIE: &str = "jwt";

/// Source of the bearer token, consulted on every authenticated call
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

/// A fixed token, mostly useful for scripts and tests
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Shared view of a raw cookie string (`a=1; jwt=...`), as found in a
/// `Cookie` header or `document.cookie`.
///
/// The string is parsed again on every read, so an updated cookie is picked
/// up by the next call without any caching in between.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    raw: Arc<RwLock<String>>,
}

impl CookieJar {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: Arc::new(RwLock::new(raw.into())),
        }
    }

    /// Replaces the whole cookie string
    pub fn set_raw(&self, raw: impl Into<String>) {
        let mut guard = self.raw.write().unwrap_or_else(|e| e.into_inner());
        *guard = raw.into();
    }

    /// Returns the percent-decoded value of the named cookie
    pub fn get(&self, name: &str) -> Option<String> {
        let raw = self.raw.read().unwrap_or_else(|e| e.into_inner());

        Cookie::split_parse_encoded(raw.as_str())
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_string())
    }
}

impl TokenProvider for CookieJar {
    fn token(&self) -> Option<String> {
        self.get(SESSION_COOKIE).filter(|value| !value.is_empty())
    }
}
