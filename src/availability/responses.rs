//! Response DTOs for availability API endpoints.

use serde::Serialize;

use crate::models::Reservation;

/// Outcome of a conflict scan.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    /// The first blocking reservation, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<Reservation>,
}
