//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, http, lifecycle produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (resolution and request counters, latency histogram)
//!
//! Consumers:
//!     → stdout (text or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event, never formatted strings alone
//! - Request ID flows through the HTTP trace span
//! - Metric calls are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
