//! History-mode path router for a single-page application.
//!
//! Maps URL paths to views through an immutable route table, follows
//! redirects, and serves the result over HTTP.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod views;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use navigation::{MemoryHistory, NavigationTarget, Navigator};
pub use routing::{Route, RouteMatch, RouteTable};
pub use views::ViewId;
