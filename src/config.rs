use tracing::{debug, instrument};

use crate::shared::ClientError;

pub const API_URL: &str = "API_URL";
pub const OAUTH_LOGIN_URL: &str = "OAUTH_LOGIN_URL";
pub const JWT_PUBLIC_KEY: &str = "JWT_PUBLIC_KEY";

/// Prefix accepted for settings carried over from the old bundler environment
const LEGACY_PREFIX: &str = "VITE_";

/// Deployment settings for the client, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub oauth_login_url: String,
    /// Base64 SPKI DER of the RSA key that signs session tokens
    pub jwt_public_key: String,
}

impl ClientConfig {
    pub fn new(
        api_url: impl Into<String>,
        oauth_login_url: Option<String>,
        jwt_public_key: impl Into<String>,
    ) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        let oauth_login_url = oauth_login_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| format!("{}/oauth/login", api_url));

        Self {
            api_url,
            oauth_login_url,
            jwt_public_key: jwt_public_key.into(),
        }
    }

    /// Reads the configuration from process environment variables
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through an arbitrary key lookup
    #[instrument(skip(lookup))]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .or_else(|| {
                    lookup(&format!("{}{}", LEGACY_PREFIX, key)).filter(|value| !value.is_empty())
                })
        };

        let api_url = get(API_URL)
            .ok_or_else(|| ClientError::Config(format!("{} must be set", API_URL)))?;
        let jwt_public_key = get(JWT_PUBLIC_KEY)
            .ok_or_else(|| ClientError::Config(format!("{} must be set", JWT_PUBLIC_KEY)))?;
        let oauth_login_url = get(OAUTH_LOGIN_URL);

        debug!(
            api_url = %api_url,
            custom_login_url = oauth_login_url.is_some(),
            "Resolved client configuration"
        );

        Ok(Self::new(api_url, oauth_login_url, jwt_public_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_login_url_falls_back_to_api_url() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("API_URL", "https://api.example.edu/"),
            ("JWT_PUBLIC_KEY", "AAAA"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.example.edu");
        assert_eq!(config.oauth_login_url, "https://api.example.edu/oauth/login");
        assert_eq!(config.jwt_public_key, "AAAA");
    }

    #[test]
    fn test_explicit_login_url_wins() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("API_URL", "https://api.example.edu"),
            ("OAUTH_LOGIN_URL", "https://sso.example.edu/login"),
            ("JWT_PUBLIC_KEY", "AAAA"),
        ]))
        .unwrap();

        assert_eq!(config.oauth_login_url, "https://sso.example.edu/login");
    }

    #[test]
    fn test_empty_login_url_is_treated_as_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("API_URL", "http://localhost:8080"),
            ("OAUTH_LOGIN_URL", ""),
            ("JWT_PUBLIC_KEY", "AAAA"),
        ]))
        .unwrap();

        assert_eq!(config.oauth_login_url, "http://localhost:8080/oauth/login");
    }

    #[test]
    fn test_legacy_prefixed_names_are_accepted() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("VITE_API_URL", "http://localhost:8080"),
            ("VITE_JWT_PUBLIC_KEY", "BBBB"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.jwt_public_key, "BBBB");
    }

    #[test]
    fn test_missing_required_values() {
        let result = ClientConfig::from_lookup(lookup_from(&[("JWT_PUBLIC_KEY", "AAAA")]));
        assert!(matches!(result, Err(ClientError::Config(msg)) if msg.contains("API_URL")));

        let result = ClientConfig::from_lookup(lookup_from(&[("API_URL", "http://x")]));
        assert!(matches!(result, Err(ClientError::Config(msg)) if msg.contains("JWT_PUBLIC_KEY")));
    }
}
