use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::sync::Arc;
use tracing::{info, instrument};

use super::routes::{RouteMatch, RouteTable};
use crate::config::ClientConfig;
use crate::session::{JwtVerifier, SessionService, TokenProvider};
use crate::shared::ClientError;

/// Characters JavaScript's `encodeURI` leaves untouched
const ENCODE_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Result of checking a navigation against route metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Allowed,
    /// Leave the app for the OAuth login page
    Redirect(String),
}

/// Builds `<login_url>?origin=<origin>` with the origin encoded like `encodeURI`
pub fn login_redirect_url(login_url: &str, origin: &str) -> String {
    format!(
        "{}?origin={}",
        login_url,
        utf8_percent_encode(origin, ENCODE_URI)
    )
}

/// Gatekeeper run before every navigation
#[derive(Clone)]
pub struct RouteGuard {
    table: RouteTable,
    session: SessionService,
    login_url: String,
}

impl RouteGuard {
    pub fn new(table: RouteTable, session: SessionService, login_url: impl Into<String>) -> Self {
        Self {
            table,
            session,
            login_url: login_url.into(),
        }
    }

    /// Wires the standard route table to an RS256 verifier built from configuration
    pub fn from_config(
        config: &ClientConfig,
        provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, ClientError> {
        let verifier = JwtVerifier::from_base64_spki(&config.jwt_public_key)?;
        let session = SessionService::new(provider, Arc::new(verifier));

        Ok(Self::new(
            RouteTable::default(),
            session,
            config.oauth_login_url.clone(),
        ))
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolves `full_path` and decides whether navigation may continue
    #[instrument(skip(self))]
    pub async fn before_each(&self, full_path: &str) -> GuardOutcome {
        let target = self.table.resolve(full_path);
        self.check(target.as_ref(), full_path).await
    }

    /// Decides for an already resolved target; unmatched paths carry no metadata
    pub async fn check(&self, target: Option<&RouteMatch>, full_path: &str) -> GuardOutcome {
        let Some(route) = target.map(|m| &m.route).filter(|route| route.is_protected()) else {
            return GuardOutcome::Allowed;
        };

        if self.session.student_auth().await {
            info!(route = route.name, "Student session accepted");
            return GuardOutcome::Allowed;
        }

        let url = login_redirect_url(&self.login_url, full_path);
        info!(
            route = route.name,
            redirect = %url,
            "Not authenticated, redirecting to OAuth login"
        );
        GuardOutcome::Redirect(url)
    }
}
