//! Availability checker for reservations.
//!
//! Decides whether a candidate booking window conflicts with an existing
//! reservation on the same resource, and places reservations once the scan
//! passes. Called by the management front-end via HTTP/JSON.

pub mod checker;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use checker::{find_conflict, ranges_overlap, validate_window, WindowError};
pub use routes::{reservations_router, router};
pub use services::AvailabilityOutcome;
