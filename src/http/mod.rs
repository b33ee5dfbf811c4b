//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign request ID)
//!     → RouteTable::resolve(path)
//!     → response.rs (page, redirect or not-found)
//!     → Send to client
//! ```
//!
//! Every GET path falls through to the route table, which is what history
//! mode needs: a deep link such as `/test2` is served directly.

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
