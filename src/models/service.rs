//! Extra-service lines attached to reservations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Chargeable add-on attached to a reservation.
///
/// `line_total` is fixed when the line is selected (`quantity x unit_price`)
/// and trusted afterwards; invoice computation sums stored line totals and
/// never re-reads the catalog price. Amounts decode leniently - malformed
/// values read as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraServiceLine {
    #[serde(
        rename = "servicio_extra_id",
        alias = "servicio_id",
        deserialize_with = "lenient::flexible_i64"
    )]
    pub service_id: i64,
    #[serde(
        rename = "cantidad",
        default,
        deserialize_with = "lenient::u32_or_zero"
    )]
    pub quantity: u32,
    #[serde(
        rename = "precio_unitario",
        default,
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "lenient::decimal_or_zero"
    )]
    pub unit_price: Decimal,
    #[serde(
        rename = "precio_total",
        default,
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "lenient::decimal_or_zero"
    )]
    pub line_total: Decimal,
}

impl ExtraServiceLine {
    /// Build a line at selection time, locking the price in. Quantities
    /// below one are raised to one.
    pub fn priced(service_id: i64, quantity: u32, unit_price: Decimal) -> Self {
        let quantity = quantity.max(1);
        Self {
            service_id,
            quantity,
            unit_price,
            line_total: unit_price * Decimal::from(quantity),
        }
    }
}

/// Payload to attach a line to a reservation on the backend.
#[derive(Debug, Clone, Serialize)]
pub struct NewServiceLine {
    #[serde(rename = "reserva_id")]
    pub reservation_id: i64,
    #[serde(flatten)]
    pub line: ExtraServiceLine,
}
