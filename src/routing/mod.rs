//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Requested path
//!     → table.rs (exact lookup in the path index)
//!     → redirect route? follow target, repeat
//!     → Return: RouteMatch::Found or RouteMatch::NotFound
//!
//! Table construction (at startup):
//!     Route[] (built-in or from config)
//!     → validate (unique paths/names, known redirect targets, no cycles)
//!     → index by path and name
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable at runtime
//! - Exact path matching only, no patterns or wildcards
//! - Redirect cycles are rejected at construction, so resolution always terminates
//! - Explicit NotFound rather than a silent default view

pub mod error;
pub mod route;
pub mod table;

pub use error::RouteError;
pub use route::{Route, RouteMatch, RouteTarget};
pub use table::{validate_routes, RouteTable};
