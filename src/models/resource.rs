//! Bookable resource records fetched from the hotel backend.
//!
//! Each kind carries its own price field on the wire: `precio_noche` for
//! rooms, `precio_unitario` for tables, `precio_alquiler` for event halls.
//! Price fields decode leniently - an unparseable price reads as zero and
//! the quote proceeds.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::lenient;
use super::reservation::ResourceKind;

/// Physical availability flag carried by every resource record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AvailabilityState {
    #[serde(rename = "disponible")]
    Available,
    #[serde(rename = "ocupada", alias = "ocupado")]
    Occupied,
    #[serde(rename = "mantenimiento")]
    Maintenance,
}

/// Room record with its nightly rate.
#[derive(Debug, Clone, Deserialize)]
pub struct Room {
    #[serde(deserialize_with = "lenient::flexible_i64")]
    pub id: i64,
    #[serde(
        rename = "precio_noche",
        default,
        deserialize_with = "lenient::decimal_or_zero"
    )]
    pub nightly_rate: Decimal,
    #[serde(rename = "estado")]
    pub state: AvailabilityState,
}

/// Restaurant table record with its per-use rate.
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    #[serde(deserialize_with = "lenient::flexible_i64")]
    pub id: i64,
    #[serde(
        rename = "precio_unitario",
        default,
        deserialize_with = "lenient::decimal_or_zero"
    )]
    pub per_use_rate: Decimal,
    #[serde(rename = "estado")]
    pub state: AvailabilityState,
}

/// Event hall record with its per-event rate.
#[derive(Debug, Clone, Deserialize)]
pub struct Hall {
    #[serde(deserialize_with = "lenient::flexible_i64")]
    pub id: i64,
    #[serde(
        rename = "precio_alquiler",
        default,
        deserialize_with = "lenient::decimal_or_zero"
    )]
    pub event_rate: Decimal,
    #[serde(rename = "estado")]
    pub state: AvailabilityState,
}

/// A bookable resource with its kind-specific pricing unit.
#[derive(Debug, Clone)]
pub enum Resource {
    Room(Room),
    Table(Table),
    Hall(Hall),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Room(_) => ResourceKind::Room,
            Resource::Table(_) => ResourceKind::Table,
            Resource::Hall(_) => ResourceKind::Hall,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Resource::Room(r) => r.id,
            Resource::Table(t) => t.id,
            Resource::Hall(h) => h.id,
        }
    }

    /// Price per billing unit: per night, per use, or per event. The stay
    /// duration formula is the same for all three.
    pub fn unit_price(&self) -> Decimal {
        match self {
            Resource::Room(r) => r.nightly_rate,
            Resource::Table(t) => t.per_use_rate,
            Resource::Hall(h) => h.event_rate,
        }
    }

    pub fn state(&self) -> AvailabilityState {
        match self {
            Resource::Room(r) => r.state,
            Resource::Table(t) => t.state,
            Resource::Hall(h) => h.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_room_decodes_string_price() {
        let room: Room = serde_json::from_value(json!({
            "id": 4,
            "precio_noche": "120.50",
            "estado": "disponible"
        }))
        .unwrap();
        assert_eq!(room.nightly_rate, dec!(120.50));
        assert_eq!(room.state, AvailabilityState::Available);
    }

    #[test]
    fn test_malformed_price_reads_as_zero() {
        let room: Room = serde_json::from_value(json!({
            "id": 4,
            "precio_noche": "abc",
            "estado": "mantenimiento"
        }))
        .unwrap();
        assert_eq!(room.nightly_rate, Decimal::ZERO);
    }

    #[test]
    fn test_unit_price_per_kind() {
        let hall = Resource::Hall(Hall {
            id: 2,
            event_rate: dec!(900),
            state: AvailabilityState::Available,
        });
        assert_eq!(hall.unit_price(), dec!(900));
        assert_eq!(hall.kind(), ResourceKind::Hall);
        assert_eq!(hall.id(), 2);
    }

    #[test]
    fn test_occupied_accepts_both_spellings() {
        let feminine: AvailabilityState = serde_json::from_value(json!("ocupada")).unwrap();
        let masculine: AvailabilityState = serde_json::from_value(json!("ocupado")).unwrap();
        assert_eq!(feminine, AvailabilityState::Occupied);
        assert_eq!(masculine, AvailabilityState::Occupied);
    }
}
