//! Programmatic navigation over a route table.

use std::fmt;

use thiserror::Error;

use crate::navigation::history::History;
use crate::routing::{RouteMatch, RouteTable};

/// Where to navigate: a literal path or a route name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Path(String),
    Name(String),
}

impl NavigationTarget {
    /// Interpret `input` as a path when it starts with `/`, otherwise as a
    /// route name.
    pub fn parse(input: &str) -> Self {
        if input.starts_with('/') {
            NavigationTarget::Path(input.to_string())
        } else {
            NavigationTarget::Name(input.to_string())
        }
    }
}

impl From<&str> for NavigationTarget {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationTarget::Path(p) => write!(f, "path {}", p),
            NavigationTarget::Name(n) => write!(f, "route {}", n),
        }
    }
}

/// Navigation failures. All are recoverable; the current location is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route named {0}")]
    UnknownRouteName(String),
}

/// Tracks the current location and its resolved outcome.
pub struct Navigator<'t, H: History> {
    table: &'t RouteTable,
    history: H,
    current: RouteMatch,
}

impl<'t, H: History> Navigator<'t, H> {
    /// Start at the history's current location and resolve it.
    pub fn new(table: &'t RouteTable, history: H) -> Self {
        let current = table.resolve(history.current());
        let mut nav = Self {
            table,
            history,
            current,
        };
        nav.sync_location();
        nav
    }

    /// Navigate to a path or route name, pushing a history entry.
    pub fn navigate(
        &mut self,
        target: impl Into<NavigationTarget>,
    ) -> Result<&RouteMatch, NavigationError> {
        let target = target.into();
        let table = self.table;
        let path = match &target {
            NavigationTarget::Path(p) => p.as_str(),
            NavigationTarget::Name(n) => table
                .path_for_name(n)
                .ok_or_else(|| NavigationError::UnknownRouteName(n.clone()))?,
        };

        tracing::debug!(destination = %target, path = %path, "Navigating");
        self.history.push(path);
        self.current = table.resolve(path);
        self.sync_location();
        Ok(&self.current)
    }

    /// Go one entry back. Returns `None` when already at the first entry.
    pub fn back(&mut self) -> Option<&RouteMatch> {
        let path = self.history.back()?.to_string();
        self.current = self.table.resolve(&path);
        Some(&self.current)
    }

    /// Go one entry forward. Returns `None` when already at the last entry.
    pub fn forward(&mut self) -> Option<&RouteMatch> {
        let path = self.history.forward()?.to_string();
        self.current = self.table.resolve(&path);
        Some(&self.current)
    }

    /// The outcome the view layer should render.
    pub fn current(&self) -> &RouteMatch {
        &self.current
    }

    /// The location as displayed in the address bar.
    pub fn location(&self) -> &str {
        self.history.current()
    }

    /// The underlying session history.
    pub fn history(&self) -> &H {
        &self.history
    }

    // A redirect rewrites the entry it landed on instead of adding one.
    fn sync_location(&mut self) {
        if self.current.is_redirected() {
            self.history.replace(self.current.path());
        }
    }
}
