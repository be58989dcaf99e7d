//! Invoice records sent to the hotel backend at billing time.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;
use super::reservation::ResourceKind;
use super::service::ExtraServiceLine;

/// How the discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Flat amount subtracted from the subtotal.
    #[default]
    Fixed,
    /// Percentage of the subtotal; the UI keeps it within 0-100.
    Percentage,
}

/// Invoice lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    #[serde(rename = "emitida")]
    Issued,
}

/// The billed reservation as captured on the invoice.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationSnapshot {
    #[serde(rename = "tipo_reserva")]
    pub resource_kind: ResourceKind,
    #[serde(rename = "id_objeto")]
    pub resource_id: i64,
    #[serde(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "fecha_fin")]
    pub end_date: NaiveDate,
}

/// Invoice payload for the backend's billing endpoint.
///
/// Carries the full computed breakdown alongside the reservation snapshot
/// and the service lines as they were priced at selection time.
#[derive(Debug, Clone, Serialize)]
pub struct NewInvoice {
    #[serde(rename = "cliente_id")]
    pub client_id: i64,
    #[serde(rename = "usuario_id")]
    pub user_id: i64,
    #[serde(rename = "reservas")]
    pub reservations: Vec<ReservationSnapshot>,
    #[serde(rename = "servicios_extra")]
    pub service_lines: Vec<ExtraServiceLine>,
    #[serde(
        rename = "subtotal_base",
        serialize_with = "rust_decimal::serde::str::serialize"
    )]
    pub base_subtotal: Decimal,
    #[serde(
        rename = "descuento",
        serialize_with = "rust_decimal::serde::str::serialize"
    )]
    pub discount: Decimal,
    #[serde(rename = "tipo_descuento")]
    pub discount_kind: DiscountKind,
    #[serde(
        rename = "tasa_impuesto",
        serialize_with = "rust_decimal::serde::str::serialize"
    )]
    pub tax_rate: Decimal,
    #[serde(
        rename = "impuesto",
        serialize_with = "rust_decimal::serde::str::serialize"
    )]
    pub tax_amount: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::str::serialize")]
    pub total: Decimal,
    #[serde(rename = "estado")]
    pub status: InvoiceStatus,
}

/// Backend acknowledgement of a created invoice.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedInvoice {
    #[serde(deserialize_with = "lenient::flexible_i64")]
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_invoice_wire_field_names() {
        let invoice = NewInvoice {
            client_id: 3,
            user_id: 1,
            reservations: vec![ReservationSnapshot {
                resource_kind: ResourceKind::Room,
                resource_id: 8,
                start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            }],
            service_lines: vec![ExtraServiceLine::priced(4, 1, dec!(50))],
            base_subtotal: dec!(300),
            discount: dec!(10),
            discount_kind: DiscountKind::Fixed,
            tax_rate: dec!(12),
            tax_amount: dec!(40.8),
            total: dec!(380.8),
            status: InvoiceStatus::Issued,
        };

        let value = serde_json::to_value(&invoice).unwrap();
        assert_eq!(value["cliente_id"], json!(3));
        assert_eq!(value["usuario_id"], json!(1));
        assert_eq!(value["reservas"][0]["tipo_reserva"], json!("habitacion"));
        assert_eq!(value["reservas"][0]["fecha_inicio"], json!("2024-03-01"));
        assert_eq!(value["servicios_extra"][0]["precio_total"], json!("50"));
        assert_eq!(value["descuento"], json!("10"));
        assert_eq!(value["tipo_descuento"], json!("fixed"));
        assert_eq!(value["impuesto"], json!("40.8"));
        assert_eq!(value["total"], json!("380.8"));
        assert_eq!(value["estado"], json!("emitida"));
    }

    #[test]
    fn test_created_invoice_accepts_string_id() {
        let created: CreatedInvoice = serde_json::from_value(json!({"id": "42"})).unwrap();
        assert_eq!(created.id, 42);
    }
}
