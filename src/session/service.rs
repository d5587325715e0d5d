use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::{cookie::TokenProvider, token::SessionVerifier, types::SessionClaims};
use crate::shared::ClientError;

/// Answers "is there a verified student session right now?"
#[derive(Clone)]
pub struct SessionService {
    provider: Arc<dyn TokenProvider>,
    verifier: Arc<dyn SessionVerifier + Send + Sync>,
}

impl SessionService {
    pub fn new(
        provider: Arc<dyn TokenProvider>,
        verifier: Arc<dyn SessionVerifier + Send + Sync>,
    ) -> Self {
        Self { provider, verifier }
    }

    /// Reads the current token and returns its claims if it belongs to a student
    #[instrument(skip(self))]
    pub async fn validate_session(&self) -> Result<SessionClaims, ClientError> {
        let token = self.provider.token().ok_or(ClientError::MissingToken)?;

        let claims = self.verifier.verify(&token).await?;
        if !claims.student {
            return Err(ClientError::Unauthorized(
                "Session does not belong to a student".to_string(),
            ));
        }

        info!(
            unique_id = %claims.unique_id,
            expires_at = ?claims.expires_at(),
            "Student session validated"
        );
        Ok(claims)
    }

    /// Collapses every failure into `false`; never grants access on error
    #[instrument(skip(self))]
    pub async fn student_auth(&self) -> bool {
        match self.validate_session().await {
            Ok(_) => true,
            Err(ClientError::MissingToken) => {
                info!("No session token present");
                false
            }
            Err(e) if e.is_auth_failure() => {
                warn!("JWT verification failed: {}", e);
                false
            }
            Err(e) => {
                error!("Session check failed: {}", e);
                false
            }
        }
    }
}
