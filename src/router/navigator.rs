use tracing::{debug, instrument};

use super::guard::{GuardOutcome, RouteGuard};
use super::routes::RouteMatch;

/// What the navigation layer should do with a requested path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Render the matched view in-app
    Render(RouteMatch),
    NotFound(String),
    /// Full page load of an off-site URL; in-app navigation stops here
    External(String),
}

/// Applies guard outcomes to navigation requests
#[derive(Clone)]
pub struct Navigator {
    guard: RouteGuard,
}

impl Navigator {
    pub fn new(guard: RouteGuard) -> Self {
        Self { guard }
    }

    #[instrument(skip(self))]
    pub async fn navigate(&self, full_path: &str) -> Navigation {
        let target = self.guard.table().resolve(full_path);

        match self.guard.check(target.as_ref(), full_path).await {
            GuardOutcome::Redirect(url) => Navigation::External(url),
            GuardOutcome::Allowed => match target {
                Some(route) => {
                    debug!(route = route.route.name, "Rendering route");
                    Navigation::Render(route)
                }
                None => {
                    debug!("No route matches path");
                    Navigation::NotFound(full_path.to_string())
                }
            },
        }
    }
}
