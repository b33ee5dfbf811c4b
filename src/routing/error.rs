//! Route table errors.

use thiserror::Error;

/// A route table that cannot be used. Always fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route table is empty")]
    EmptyTable,

    #[error("route path must start with '/': {0:?}")]
    InvalidPath(String),

    #[error("duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    #[error("route {path} redirects to unknown path {target}")]
    UnknownRedirectTarget { path: String, target: String },

    #[error("redirect cycle: {}", chain.join(" -> "))]
    RedirectCycle { chain: Vec<String> },
}
