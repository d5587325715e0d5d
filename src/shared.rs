use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("JWT error: {0}")]
    JwtError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid verification key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No session token available")]
    MissingToken,

    #[error("Rating is missing criterion `{0}`")]
    MissingCriterion(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl ClientError {
    /// True for token problems, as opposed to a broken verifier or transport
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ClientError::JwtError(_) | ClientError::Unauthorized(_) | ClientError::MissingToken
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failures_are_classified() {
        assert!(ClientError::JwtError("bad signature".to_string()).is_auth_failure());
        assert!(ClientError::Unauthorized("not a student".to_string()).is_auth_failure());
        assert!(ClientError::MissingToken.is_auth_failure());
        assert!(!ClientError::MissingCriterion("Effort").is_auth_failure());
        assert!(!ClientError::Config("API_URL".to_string()).is_auth_failure());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClientError::MissingCriterion("Resources").to_string(),
            "Rating is missing criterion `Resources`"
        );
        assert_eq!(
            ClientError::MissingToken.to_string(),
            "No session token available"
        );
    }
}
