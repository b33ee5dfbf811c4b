//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Build the route table once
//! - Report what will be served
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - A missing config path means built-in defaults, not an error

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{load_config, AppConfig, ConfigError};
use crate::routing::{RouteError, RouteTable, RouteTarget};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid route table: {0}")]
    Routes(#[from] RouteError),
}

/// Load the config from `path`, or use defaults when `None`.
pub fn load(path: Option<&Path>) -> Result<AppConfig, StartupError> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => Ok(AppConfig::default()),
    }
}

/// Build the shared route table and log its contents.
pub fn build_route_table(config: &AppConfig) -> Result<Arc<RouteTable>, StartupError> {
    let table = config.route_table()?;
    for route in table.routes() {
        match route.target() {
            RouteTarget::View(view) => tracing::info!(
                path = %route.path(),
                name = route.name().unwrap_or("-"),
                view = %view,
                "Route registered"
            ),
            RouteTarget::Redirect(target) => tracing::info!(
                path = %route.path(),
                redirect = %target,
                "Redirect registered"
            ),
        }
    }
    Ok(Arc::new(table))
}
