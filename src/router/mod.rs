// Public API - what other modules can use
pub use guard::{login_redirect_url, GuardOutcome, RouteGuard};
pub use navigator::{Navigation, Navigator};
pub use routes::{RouteDescriptor, RouteMatch, RouteMeta, RouteTable, ROUTES};

// Internal modules
mod guard;
mod navigator;
mod routes;
