use percent_encoding::percent_decode_str;
use std::collections::BTreeMap;

/// Static per-route flags consulted by the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
    /// `None` when the route declares no auth requirement at all
    pub requires_auth: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Pattern such as `/course/:id`
    pub path: &'static str,
    pub name: &'static str,
    pub view: &'static str,
    /// View is fetched on first navigation rather than bundled up front
    pub lazy: bool,
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    pub const fn new(path: &'static str, name: &'static str, view: &'static str) -> Self {
        Self {
            path,
            name,
            view,
            lazy: false,
            meta: RouteMeta {
                requires_auth: None,
            },
        }
    }

    pub const fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    pub const fn requires_auth(mut self, requires_auth: bool) -> Self {
        self.meta.requires_auth = Some(requires_auth);
        self
    }

    pub fn is_protected(&self) -> bool {
        self.meta.requires_auth.unwrap_or(false)
    }
}

/// Routes of the course-review app
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::new("/", "home", "HomeView").requires_auth(false),
    RouteDescriptor::new("/about", "about", "AboutView")
        .lazy()
        .requires_auth(false),
    RouteDescriptor::new("/course/:id", "course", "CourseView").requires_auth(false),
    RouteDescriptor::new("/compare", "compare", "CompareView")
        .lazy()
        .requires_auth(false),
    RouteDescriptor::new("/add", "add", "AddView")
        .lazy()
        .requires_auth(false),
    RouteDescriptor::new("/admin", "admin", "AdminView")
        .lazy()
        .requires_auth(true),
    RouteDescriptor::new("/tokenset", "tokenset", "TokenView").lazy(),
];

/// A resolved navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: RouteDescriptor,
    pub params: BTreeMap<String, String>,
    /// Path as requested, including query and fragment
    pub full_path: String,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(ROUTES.to_vec())
    }
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Matches a full path against the table; first declared route wins
    pub fn resolve(&self, full_path: &str) -> Option<RouteMatch> {
        let path = strip_query_and_fragment(full_path);
        let segments: Vec<&str> = split_segments(path).collect();

        self.routes.iter().find_map(|route| {
            match_pattern(route.path, &segments).map(|params| RouteMatch {
                route: *route,
                params,
                full_path: full_path.to_string(),
            })
        })
    }
}

fn strip_query_and_fragment(full_path: &str) -> &str {
    let end = full_path.find(['?', '#']).unwrap_or(full_path.len());
    &full_path[..end]
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn match_pattern(pattern: &str, segments: &[&str]) -> Option<BTreeMap<String, String>> {
    let expected: Vec<&str> = split_segments(pattern).collect();
    if expected.len() != segments.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (expected, actual) in expected.iter().zip(segments) {
        match expected.strip_prefix(':') {
            Some(name) => {
                let value = percent_decode_str(actual).decode_utf8_lossy();
                params.insert(name.to_string(), value.into_owned());
            }
            None if expected.eq_ignore_ascii_case(actual) => {}
            None => return None,
        }
    }

    Some(params)
}
