//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check each route entry has exactly one target
//! - Enforce route table invariants (unique paths/names, no redirect cycles)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routing::{validate_routes, RouteError};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route {path} needs either `view` or `redirect`")]
    MissingTarget { path: String },

    #[error("route {path} sets both `view` and `redirect`")]
    ConflictingTarget { path: String },

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("invalid {field}: {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("server.request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("unknown log level: {0:?}")]
    UnknownLogLevel(String),
}

/// Validate a parsed config.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "server.bind_address",
            value: config.server.bind_address.clone(),
        });
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }
    if !LOG_LEVELS.contains(&config.observability.log_level.to_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    let mut routes = Vec::with_capacity(config.routes.len());
    for entry in &config.routes {
        match (&entry.view, &entry.redirect) {
            (None, None) => errors.push(ValidationError::MissingTarget {
                path: entry.path.clone(),
            }),
            (Some(_), Some(_)) => errors.push(ValidationError::ConflictingTarget {
                path: entry.path.clone(),
            }),
            _ => {}
        }
        routes.extend(entry.to_route());
    }
    // An entry-level problem already explains an empty table.
    if !(routes.is_empty() && !errors.is_empty()) {
        if let Err(route_errors) = validate_routes(&routes) {
            errors.extend(route_errors.into_iter().map(ValidationError::from));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
