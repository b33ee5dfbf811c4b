//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::{Route, RouteError, RouteTable, RouteTarget};
use crate::views::ViewId;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,

    /// Route table, in declaration order.
    pub routes: Vec<RouteConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            observability: ObservabilityConfig::default(),
            routes: RouteTable::default_table()
                .routes()
                .iter()
                .map(RouteConfig::from)
                .collect(),
        }
    }
}

impl AppConfig {
    /// Build the immutable route table described by this config.
    ///
    /// Entries without exactly one of `view` / `redirect` are rejected by
    /// [`validate_config`](crate::config::validate_config); here they are
    /// skipped, so always validate first.
    pub fn route_table(&self) -> Result<RouteTable, RouteError> {
        RouteTable::new(self.routes.iter().filter_map(RouteConfig::to_route).collect())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    pub json_logs: bool,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// A route entry as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Exact path to match.
    pub path: String,

    /// Symbolic name for programmatic navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// View to render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewId>,

    /// Path to redirect to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl RouteConfig {
    /// Convert to a route. `None` when the entry has neither or both targets.
    pub fn to_route(&self) -> Option<Route> {
        let route = match (&self.view, &self.redirect) {
            (Some(view), None) => Route::view(self.path.clone(), *view),
            (None, Some(target)) => Route::redirect(self.path.clone(), target.clone()),
            _ => return None,
        };
        Some(match &self.name {
            Some(name) => route.named(name.clone()),
            None => route,
        })
    }
}

impl From<&Route> for RouteConfig {
    fn from(route: &Route) -> Self {
        let (view, redirect) = match route.target() {
            RouteTarget::View(v) => (Some(*v), None),
            RouteTarget::Redirect(t) => (None, Some(t.clone())),
        };
        Self {
            path: route.path().to_string(),
            name: route.name().map(str::to_string),
            view,
            redirect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:8080");
        assert_eq!(config.routes.len(), 4);
        assert_eq!(
            config.routes[0],
            RouteConfig {
                path: "/".into(),
                name: None,
                view: None,
                redirect: Some("/test1".into()),
            }
        );
    }

    #[test]
    fn test_parse_routes() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            bind_address = "0.0.0.0:3000"

            [[routes]]
            path = "/"
            redirect = "/test3"

            [[routes]]
            path = "/test3"
            name = "Three"
            view = "Test3"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind_address, "0.0.0.0:3000");
        assert_eq!(config.server.request_timeout_secs, 30);
        let table = config.route_table().unwrap();
        assert_eq!(table.resolve("/").view(), Some(ViewId::Test3));
        assert_eq!(table.path_for_name("Three"), Some("/test3"));
    }

    #[test]
    fn test_unknown_view_is_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [[routes]]
            path = "/x"
            view = "Dashboard"
            "#,
        );
        assert!(result.is_err());
    }
}
