//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! navigate("/test3") or navigate("TestPageThree")
//!     → navigator.rs (name → path via RouteTable)
//!     → history.rs (push location)
//!     → RouteTable::resolve
//!     → redirect? replace location with final path
//!     → current RouteMatch updated for the view layer
//! ```
//!
//! # Design Decisions
//! - History is a trait so the browser history API can be swapped for memory
//! - The navigator owns its history; callers hold `&mut` like a UI thread
//! - The route table is injected by reference, never global

pub mod history;
pub mod navigator;

pub use history::{History, MemoryHistory};
pub use navigator::{NavigationError, NavigationTarget, Navigator};
