#![allow(dead_code)]

use chrono::{Duration, Utc};
use coursereview_client::session::SessionClaims;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

// ============================================================================
// Test signing keys
// ============================================================================

pub const SIGNING_KEY: &str = include_str!("../fixtures/signing_key.pem");
pub const FOREIGN_KEY: &str = include_str!("../fixtures/foreign_key.pem");
pub const PUBLIC_KEY_B64: &str = include_str!("../fixtures/signing_key.spki.b64");

pub fn claims(student: bool, expires_in: Duration) -> SessionClaims {
    SessionClaims {
        student,
        exp: (Utc::now() + expires_in).timestamp(),
        unique_id: "jdoe42".to_string(),
    }
}

pub fn sign_with(claims: &SessionClaims, private_pem: &str) -> String {
    encode(
        &Header::new(Algorithm::RS256),
        claims,
        &EncodingKey::from_rsa_pem(private_pem.as_bytes()).expect("test key"),
    )
    .expect("sign test token")
}

/// A valid token from the trusted issuer
pub fn student_token() -> String {
    sign_with(&claims(true, Duration::hours(1)), SIGNING_KEY)
}

pub fn non_student_token() -> String {
    sign_with(&claims(false, Duration::hours(1)), SIGNING_KEY)
}

pub fn expired_student_token() -> String {
    sign_with(&claims(true, Duration::minutes(-1)), SIGNING_KEY)
}

/// Well-formed RS256 token signed by a key the client does not trust
pub fn forged_student_token() -> String {
    sign_with(&claims(true, Duration::hours(1)), FOREIGN_KEY)
}

/// Trusted student token whose `nbf` lies an hour in the future
pub fn not_yet_valid_student_token() -> String {
    let now = Utc::now();
    encode(
        &Header::new(Algorithm::RS256),
        &serde_json::json!({
            "student": true,
            "unique_id": "jdoe42",
            "nbf": (now + Duration::hours(1)).timestamp(),
            "exp": (now + Duration::hours(2)).timestamp(),
        }),
        &EncodingKey::from_rsa_pem(SIGNING_KEY.as_bytes()).expect("test key"),
    )
    .expect("sign test token")
}
