//! Request DTOs for billing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::DiscountKind;

/// Request to quote a reservation.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub reservation_id: i64,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub discount_kind: DiscountKind,
    /// Percentage; falls back to the default rate when absent.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
}

/// Request to issue the invoice for a reservation.
#[derive(Debug, Deserialize)]
pub struct IssueInvoiceRequest {
    pub reservation_id: i64,
    /// Staff operator recorded on the invoice.
    pub user_id: i64,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub discount_kind: DiscountKind,
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
}
