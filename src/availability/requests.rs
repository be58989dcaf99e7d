//! Request DTOs for availability API endpoints.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{ReservationStatus, ResourceKind};

/// Request to check a candidate booking window.
#[derive(Debug, Deserialize)]
pub struct CheckAvailabilityRequest {
    pub resource_kind: ResourceKind,
    pub resource_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// When editing, the reservation under edit is left out of the scan.
    #[serde(default)]
    pub exclude_reservation_id: Option<i64>,
}

/// A selected add-on for a new reservation. The line total is fixed from
/// these values at selection time.
#[derive(Debug, Deserialize)]
pub struct ServiceSelection {
    pub service_id: i64,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// Request to place a reservation.
#[derive(Debug, Deserialize)]
pub struct PlaceReservationRequest {
    pub client_id: i64,
    pub resource_kind: ResourceKind,
    pub resource_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub guest_count: Option<u32>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceSelection>,
}

/// Request to change a reservation's status.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ReservationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_request_with_spanish_kind_value() {
        let request: CheckAvailabilityRequest = serde_json::from_value(json!({
            "resource_kind": "salon",
            "resource_id": 2,
            "start_date": "2024-01-05",
            "end_date": "2024-01-10"
        }))
        .unwrap();
        assert_eq!(request.resource_kind, ResourceKind::Hall);
        assert_eq!(request.exclude_reservation_id, None);
    }

    #[test]
    fn test_place_request_defaults() {
        let request: PlaceReservationRequest = serde_json::from_value(json!({
            "client_id": 3,
            "resource_kind": "habitacion",
            "resource_id": 8,
            "start_date": "2024-03-01",
            "end_date": "2024-03-04"
        }))
        .unwrap();
        assert!(request.services.is_empty());
        assert_eq!(request.guest_count, None);
        assert_eq!(request.comments, None);
    }
}
