// Public API - what other modules can use
pub use cookie::{CookieJar, StaticToken, TokenProvider, SESSION_COOKIE};
pub use service::SessionService;
pub use token::{JwtVerifier, SessionVerifier};
pub use types::SessionClaims;

// Internal modules
mod cookie;
mod service;
mod token;
mod types;
