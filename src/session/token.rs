use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tracing::{debug, instrument};

use super::types::SessionClaims;
use crate::shared::ClientError;

/// Checks a raw session token and yields its claims
#[async_trait]
pub trait SessionVerifier {
    async fn verify(&self, token: &str) -> Result<SessionClaims, ClientError>;
}

/// RS256 verifier for tokens signed by the OAuth service
#[derive(Clone)]
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Builds a verifier from base64 text holding a DER `SubjectPublicKeyInfo`
    pub fn from_base64_spki(encoded: &str) -> Result<Self, ClientError> {
        let der = STANDARD
            .decode(encoded.trim())
            .map_err(|e| ClientError::InvalidKey(format!("public key is not base64: {}", e)))?;

        Self::from_spki_der(&der)
    }

    pub fn from_spki_der(der: &[u8]) -> Result<Self, ClientError> {
        // `DecodingKey::from_rsa_der` only takes PKCS#1; SPKI has to go through PEM
        let body = STANDARD.encode(der);
        let mut pem = String::from("-----BEGIN PUBLIC KEY-----\n");
        for line in body.as_bytes().chunks(64) {
            pem.push_str(&String::from_utf8_lossy(line));
            pem.push('\n');
        }
        pem.push_str("-----END PUBLIC KEY-----\n");

        let key = DecodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| ClientError::InvalidKey(e.to_string()))?;

        Ok(Self::with_key(key))
    }

    pub fn with_key(key: DecodingKey) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        // exp and nbf are enforced to the second
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.validate_aud = false;

        Self { key, validation }
    }

    /// Validates a JWT token and returns the claims if valid
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, ClientError> {
        debug!("Decoding and validating JWT token");

        decode::<SessionClaims>(token, &self.key, &self.validation)
            .map(|data| {
                debug!(
                    unique_id = %data.claims.unique_id,
                    student = data.claims.student,
                    exp = data.claims.exp,
                    "JWT token decoded successfully"
                );
                data.claims
            })
            .map_err(|e| {
                debug!(error = %e, "Failed to decode JWT token");
                ClientError::JwtError(e.to_string())
            })
    }
}

#[async_trait]
impl SessionVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<SessionClaims, ClientError> {
        self.validate_token(token)
    }
}
