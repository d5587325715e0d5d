// Library crate for the course-review client
// Route guarding, session verification and the typed REST client

pub mod api;
pub mod config;
pub mod router;
pub mod session;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use api::{default_star_ratings, rating_to_request, ApiClient, StarRatings};
pub use config::ClientConfig;
pub use router::{GuardOutcome, Navigation, Navigator, RouteGuard};
pub use session::{CookieJar, JwtVerifier, SessionService, StaticToken, TokenProvider};
pub use shared::ClientError;
