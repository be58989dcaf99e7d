//! Reservation domain types, mirroring the hotel backend's wire contract.
//!
//! Field and variant names on the wire are the backend's Spanish ones; the
//! Rust side uses English. Status values appear in both gendered spellings
//! in stored data, so the enum accepts both and writes the canonical one.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::lenient;

/// What kind of bookable resource a reservation holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "habitacion")]
    Room,
    #[serde(rename = "mesa")]
    Table,
    #[serde(rename = "salon")]
    Hall,
}

impl ResourceKind {
    /// English label for user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Room => "room",
            ResourceKind::Table => "table",
            ResourceKind::Hall => "hall",
        }
    }
}

/// Reservation lifecycle state.
///
/// Transitions are not guarded: the backend accepts any status write, so a
/// confirmed or cancelled reservation may be moved again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmada", alias = "confirmado")]
    Confirmed,
    #[serde(rename = "cancelada", alias = "cancelado")]
    Cancelled,
}

impl ReservationStatus {
    /// Whether a reservation in this state blocks its resource's calendar.
    /// Cancelled reservations never block.
    pub fn is_blocking(self) -> bool {
        matches!(self, ReservationStatus::Pending | ReservationStatus::Confirmed)
    }
}

/// A booking of a room, table, or hall over an inclusive date range.
///
/// Dates are calendar dates; the optional times are informational and play
/// no part in billing or conflict checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(deserialize_with = "lenient::flexible_i64")]
    pub id: i64,
    #[serde(rename = "cliente_id", deserialize_with = "lenient::flexible_i64")]
    pub client_id: i64,
    #[serde(rename = "tipo_reserva")]
    pub resource_kind: ResourceKind,
    #[serde(rename = "id_objeto", deserialize_with = "lenient::flexible_i64")]
    pub resource_id: i64,
    #[serde(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "fecha_fin")]
    pub end_date: NaiveDate,
    #[serde(rename = "hora_inicio", default)]
    pub start_time: Option<NaiveTime>,
    #[serde(rename = "hora_fin", default)]
    pub end_time: Option<NaiveTime>,
    #[serde(
        rename = "huespedes",
        default,
        deserialize_with = "lenient::optional_u32"
    )]
    pub guest_count: Option<u32>,
    #[serde(rename = "comentarios", default)]
    pub comments: Option<String>,
    #[serde(rename = "estado")]
    pub status: ReservationStatus,
}

/// Payload for creating a reservation on the backend. New reservations
/// start out pending.
#[derive(Debug, Clone, Serialize)]
pub struct NewReservation {
    #[serde(rename = "cliente_id")]
    pub client_id: i64,
    #[serde(rename = "tipo_reserva")]
    pub resource_kind: ResourceKind,
    #[serde(rename = "id_objeto")]
    pub resource_id: i64,
    #[serde(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "fecha_fin")]
    pub end_date: NaiveDate,
    #[serde(rename = "hora_inicio")]
    pub start_time: Option<NaiveTime>,
    #[serde(rename = "hora_fin")]
    pub end_time: Option<NaiveTime>,
    #[serde(rename = "huespedes")]
    pub guest_count: Option<u32>,
    #[serde(rename = "comentarios")]
    pub comments: Option<String>,
    #[serde(rename = "estado")]
    pub status: ReservationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_accepts_both_spellings() {
        let feminine: ReservationStatus = serde_json::from_value(json!("confirmada")).unwrap();
        let masculine: ReservationStatus = serde_json::from_value(json!("confirmado")).unwrap();
        assert_eq!(feminine, ReservationStatus::Confirmed);
        assert_eq!(masculine, ReservationStatus::Confirmed);

        let cancelled: ReservationStatus = serde_json::from_value(json!("cancelado")).unwrap();
        assert_eq!(cancelled, ReservationStatus::Cancelled);
    }

    #[test]
    fn test_status_writes_canonical_spelling() {
        assert_eq!(
            serde_json::to_value(ReservationStatus::Confirmed).unwrap(),
            json!("confirmada")
        );
    }

    #[test]
    fn test_blocking_states() {
        assert!(ReservationStatus::Pending.is_blocking());
        assert!(ReservationStatus::Confirmed.is_blocking());
        assert!(!ReservationStatus::Cancelled.is_blocking());
    }

    #[test]
    fn test_reservation_decodes_string_ids_and_guest_count() {
        let reservation: Reservation = serde_json::from_value(json!({
            "id": 15,
            "cliente_id": "3",
            "tipo_reserva": "habitacion",
            "id_objeto": "8",
            "fecha_inicio": "2024-03-01",
            "fecha_fin": "2024-03-04",
            "huespedes": "2",
            "estado": "pendiente"
        }))
        .unwrap();

        assert_eq!(reservation.client_id, 3);
        assert_eq!(reservation.resource_id, 8);
        assert_eq!(reservation.resource_kind, ResourceKind::Room);
        assert_eq!(reservation.guest_count, Some(2));
        assert_eq!(reservation.start_time, None);
        assert_eq!(reservation.comments, None);
    }
}
