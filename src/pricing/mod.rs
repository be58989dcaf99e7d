//! Pricing engine for reservations.
//!
//! Derives a reservation's billable total from its resource rate, stay
//! duration, extra-service lines, discount, and tax rate. Called by the
//! management front-end via HTTP/JSON.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{round_money, QuoteBreakdown, DEFAULT_TAX_RATE};
pub use routes::router;
pub use services::{IssuedInvoice, ReservationQuote};
