use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by the session JWT issued by the OAuth service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    #[serde(default)]
    pub student: bool,
    pub exp: i64, // Expiration timestamp (standard JWT claim)
    #[serde(default)]
    pub unique_id: String,
}

impl SessionClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
