//! Route lookup and redirect resolution.
//!
//! # Responsibilities
//! - Store validated routes
//! - Resolve a path to a view, following redirects
//! - Map route names back to paths for programmatic navigation
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - O(1) path and name lookup via HashMap
//! - Validation reports every problem, construction fails on the first

use std::collections::{HashMap, HashSet};

use crate::observability::metrics;
use crate::routing::error::RouteError;
use crate::routing::route::{Route, RouteMatch, RouteTarget};
use crate::views::ViewId;

/// Immutable, validated route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Build a table from routes, rejecting any table that violates an invariant.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        if let Err(mut errors) = validate_routes(&routes) {
            return Err(errors.remove(0));
        }
        Ok(Self::index(routes))
    }

    /// The application's shipped route table.
    pub fn default_table() -> Self {
        Self::index(default_routes())
    }

    fn index(routes: Vec<Route>) -> Self {
        let by_path = routes
            .iter()
            .enumerate()
            .map(|(i, r)| (r.path().to_string(), i))
            .collect();
        let by_name = routes
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.name().map(|n| (n.to_string(), i)))
            .collect();

        Self {
            routes,
            by_path,
            by_name,
        }
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes, redirects included.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True when the table holds no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up a route by its exact path.
    pub fn get(&self, path: &str) -> Option<&Route> {
        self.by_path.get(path).map(|&i| &self.routes[i])
    }

    /// Path of the route registered under `name`.
    pub fn path_for_name(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(|&i| self.routes[i].path())
    }

    /// Resolve a requested path.
    ///
    /// Redirect routes are followed until a view route is reached. A path
    /// with no route yields [`RouteMatch::NotFound`].
    pub fn resolve(&self, path: &str) -> RouteMatch {
        let result = self.follow(path);
        tracing::debug!(
            path = %path,
            outcome = result.outcome_label(),
            resolved = %result.path(),
            "Resolved route"
        );
        metrics::record_resolution(result.outcome_label());
        result
    }

    fn follow(&self, requested: &str) -> RouteMatch {
        let mut current = requested;
        // Validation guarantees an acyclic chain, so at most one hop per route.
        for _ in 0..=self.routes.len() {
            let Some(route) = self.get(current) else {
                return RouteMatch::NotFound {
                    path: current.to_string(),
                };
            };
            match route.target() {
                RouteTarget::View(view) => {
                    return RouteMatch::Found {
                        view: *view,
                        name: route.name().map(str::to_string),
                        path: route.path().to_string(),
                        redirected_from: (current != requested).then(|| requested.to_string()),
                    };
                }
                RouteTarget::Redirect(target) => current = target.as_str(),
            }
        }

        tracing::error!(path = %requested, "Redirect chain did not terminate");
        RouteMatch::NotFound {
            path: requested.to_string(),
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::default_table()
    }
}

fn default_routes() -> Vec<Route> {
    vec![
        Route::redirect("/", "/test1"),
        Route::view("/test1", ViewId::Test1).named("TestPageOne"),
        Route::view("/test2", ViewId::Test2).named("TestPageTwo"),
        Route::view("/test3", ViewId::Test3).named("TestPageThree"),
    ]
}

/// Check every route table invariant, collecting all violations.
pub fn validate_routes(routes: &[Route]) -> Result<(), Vec<RouteError>> {
    let mut errors = Vec::new();

    if routes.is_empty() {
        return Err(vec![RouteError::EmptyTable]);
    }

    let mut paths = HashSet::new();
    let mut names = HashSet::new();
    for route in routes {
        if !route.path().starts_with('/') {
            errors.push(RouteError::InvalidPath(route.path().to_string()));
        }
        if !paths.insert(route.path()) {
            errors.push(RouteError::DuplicatePath(route.path().to_string()));
        }
        if let Some(name) = route.name() {
            if !names.insert(name) {
                errors.push(RouteError::DuplicateName(name.to_string()));
            }
        }
    }

    let redirects: HashMap<&str, &str> = routes
        .iter()
        .filter_map(|r| match r.target() {
            RouteTarget::Redirect(target) => Some((r.path(), target.as_str())),
            RouteTarget::View(_) => None,
        })
        .collect();

    for route in routes {
        let RouteTarget::Redirect(target) = route.target() else {
            continue;
        };
        if !paths.contains(target.as_str()) {
            errors.push(RouteError::UnknownRedirectTarget {
                path: route.path().to_string(),
                target: target.clone(),
            });
            continue;
        }
        if let Some(chain) = find_cycle(route.path(), &redirects) {
            // Report each cycle once, from its lexicographically smallest member.
            if chain.iter().min().map(String::as_str) == Some(route.path()) {
                errors.push(RouteError::RedirectCycle { chain });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Follow redirects from `start`; returns the chain if it comes back to `start`.
fn find_cycle(start: &str, redirects: &HashMap<&str, &str>) -> Option<Vec<String>> {
    let mut chain = vec![start.to_string()];
    let mut seen = HashSet::from([start]);
    let mut current = start;

    while let Some(&next) = redirects.get(current) {
        chain.push(next.to_string());
        if next == start {
            return Some(chain);
        }
        if !seen.insert(next) {
            // Cycle that does not include `start`; reported from its own members.
            return None;
        }
        current = next;
    }
    None
}
