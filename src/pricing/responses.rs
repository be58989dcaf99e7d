//! Response DTOs for billing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{round_money, QuoteBreakdown};

/// Quote breakdown for JSON responses. Amounts are rounded to two decimal
/// places here, at the presentation edge.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub reservation_id: i64,
    pub days: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub service_subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

impl QuoteResponse {
    pub fn from_breakdown(reservation_id: i64, breakdown: &QuoteBreakdown) -> Self {
        Self {
            reservation_id,
            days: breakdown.days,
            base_subtotal: round_money(breakdown.base_subtotal, 2),
            service_subtotal: round_money(breakdown.service_subtotal, 2),
            subtotal: round_money(breakdown.subtotal, 2),
            discount_amount: round_money(breakdown.discount_amount, 2),
            tax_amount: round_money(breakdown.tax_amount, 2),
            total: round_money(breakdown.total, 2),
        }
    }
}

/// Response after invoice issuance.
#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice_id: i64,
    #[serde(flatten)]
    pub quote: QuoteResponse,
}
