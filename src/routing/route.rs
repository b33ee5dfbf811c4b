//! Route definitions and resolution outcomes.

use serde::Serialize;

use crate::views::ViewId;

/// What a route does when it becomes active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render a view.
    View(ViewId),
    /// Re-navigate to another path.
    Redirect(String),
}

/// A single entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    name: Option<String>,
    target: RouteTarget,
}

impl Route {
    /// A route rendering `view` at `path`.
    pub fn view(path: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::View(view),
        }
    }

    /// A route sending `path` on to `target`.
    pub fn redirect(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Redirect(target.into()),
        }
    }

    /// Attach a symbolic name used for programmatic navigation.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Exact path this route matches.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Symbolic name, if the route has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// What the route does when active.
    pub fn target(&self) -> &RouteTarget {
        &self.target
    }
}

/// Result of resolving a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RouteMatch {
    /// A view route was reached, possibly through redirects.
    Found {
        view: ViewId,
        name: Option<String>,
        /// Final path after all redirects.
        path: String,
        /// The originally requested path, if a redirect was followed.
        redirected_from: Option<String>,
    },
    /// No route exists for the path.
    NotFound { path: String },
}

impl RouteMatch {
    /// The view to render, or `None` for the not-found outcome.
    pub fn view(&self) -> Option<ViewId> {
        match self {
            RouteMatch::Found { view, .. } => Some(*view),
            RouteMatch::NotFound { .. } => None,
        }
    }

    /// The path the location should display.
    pub fn path(&self) -> &str {
        match self {
            RouteMatch::Found { path, .. } => path,
            RouteMatch::NotFound { path } => path,
        }
    }

    /// Name of the route that rendered, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            RouteMatch::Found { name, .. } => name.as_deref(),
            RouteMatch::NotFound { .. } => None,
        }
    }

    /// True when no route matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteMatch::NotFound { .. })
    }

    /// True when at least one redirect was followed.
    pub fn is_redirected(&self) -> bool {
        matches!(
            self,
            RouteMatch::Found {
                redirected_from: Some(_),
                ..
            }
        )
    }

    /// True when both outcomes render the same view at the same location,
    /// regardless of how they were reached.
    pub fn same_outcome(&self, other: &RouteMatch) -> bool {
        self.view() == other.view() && self.path() == other.path()
    }

    /// Label used in logs and metrics.
    pub fn outcome_label(&self) -> &'static str {
        match self {
            RouteMatch::Found {
                redirected_from: Some(_),
                ..
            } => "redirected",
            RouteMatch::Found { .. } => "found",
            RouteMatch::NotFound { .. } => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_builders() {
        let route = Route::view("/test1", ViewId::Test1).named("TestPageOne");
        assert_eq!(route.path(), "/test1");
        assert_eq!(route.name(), Some("TestPageOne"));
        assert_eq!(route.target(), &RouteTarget::View(ViewId::Test1));

        let redirect = Route::redirect("/", "/test1");
        assert_eq!(redirect.name(), None);
        assert_eq!(redirect.target(), &RouteTarget::Redirect("/test1".into()));
    }

    #[test]
    fn test_same_outcome_ignores_redirect_origin() {
        let direct = RouteMatch::Found {
            view: ViewId::Test1,
            name: Some("TestPageOne".into()),
            path: "/test1".into(),
            redirected_from: None,
        };
        let via_root = RouteMatch::Found {
            view: ViewId::Test1,
            name: Some("TestPageOne".into()),
            path: "/test1".into(),
            redirected_from: Some("/".into()),
        };
        assert!(direct.same_outcome(&via_root));
        assert_ne!(direct, via_root);
        assert_eq!(via_root.outcome_label(), "redirected");
    }

    #[test]
    fn test_serializes_with_outcome_tag() {
        let m = RouteMatch::NotFound { path: "/nope".into() };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["outcome"], "not_found");
        assert_eq!(json["path"], "/nope");
    }
}
