//! Billing service functions backed by the hotel backend.
//!
//! These functions fetch the data a computation needs, run the pure
//! calculators, and perform the mutating calls for invoice issuance.

use rust_decimal::Decimal;
use tracing::warn;

use crate::backend::{BackendClient, Session};
use crate::error::{AppError, Result};
use crate::models::{
    DiscountKind, ExtraServiceLine, InvoiceStatus, NewInvoice, Reservation, ReservationSnapshot,
    ReservationStatus,
};

use super::calculators::{build_quote, QuoteBreakdown, DEFAULT_TAX_RATE};

/// A computed quote together with the data it was priced from.
#[derive(Debug, Clone)]
pub struct ReservationQuote {
    pub reservation: Reservation,
    pub lines: Vec<ExtraServiceLine>,
    pub breakdown: QuoteBreakdown,
}

/// Outcome of invoice issuance.
#[derive(Debug, Clone)]
pub struct IssuedInvoice {
    pub invoice_id: i64,
    pub breakdown: QuoteBreakdown,
}

/// Compute the billable breakdown for a reservation.
///
/// Fetches the reservation, its service lines, and its resource record,
/// then runs the pure quote math. Unparseable upstream prices have already
/// collapsed to zero during decoding, so a quote always comes back.
pub async fn quote_reservation(
    backend: &BackendClient,
    session: &Session,
    reservation_id: i64,
    discount: Decimal,
    discount_kind: DiscountKind,
    tax_rate: Option<Decimal>,
) -> Result<ReservationQuote> {
    let reservation = backend.reservation(session, reservation_id).await?;
    let lines = backend.service_lines(session, reservation_id).await?;
    let resource = backend
        .resource(session, reservation.resource_kind, reservation.resource_id)
        .await?;

    let breakdown = build_quote(
        resource.unit_price(),
        reservation.start_date,
        reservation.end_date,
        &lines,
        discount,
        discount_kind,
        tax_rate.unwrap_or(DEFAULT_TAX_RATE),
    );

    Ok(ReservationQuote {
        reservation,
        lines,
        breakdown,
    })
}

/// Issue the invoice for a reservation, then confirm the reservation.
///
/// Rejects before any mutating call when the computed total is zero or
/// negative. Invoice creation and reservation confirmation are two backend
/// calls; the confirmation is retried once, and a terminal failure surfaces
/// the created invoice id so the records can be reconciled.
pub async fn issue_invoice(
    backend: &BackendClient,
    session: &Session,
    reservation_id: i64,
    user_id: i64,
    discount: Decimal,
    discount_kind: DiscountKind,
    tax_rate: Option<Decimal>,
) -> Result<IssuedInvoice> {
    let quote = quote_reservation(
        backend,
        session,
        reservation_id,
        discount,
        discount_kind,
        tax_rate,
    )
    .await?;

    if !quote.breakdown.is_billable() {
        return Err(AppError::Validation(
            "Invoice total must be greater than zero; check prices and discount".to_string(),
        ));
    }

    let reservation = &quote.reservation;
    let invoice = NewInvoice {
        client_id: reservation.client_id,
        user_id,
        reservations: vec![ReservationSnapshot {
            resource_kind: reservation.resource_kind,
            resource_id: reservation.resource_id,
            start_date: reservation.start_date,
            end_date: reservation.end_date,
        }],
        service_lines: quote.lines.clone(),
        base_subtotal: quote.breakdown.base_subtotal,
        discount,
        discount_kind,
        tax_rate: tax_rate.unwrap_or(DEFAULT_TAX_RATE),
        tax_amount: quote.breakdown.tax_amount,
        total: quote.breakdown.total,
        status: InvoiceStatus::Issued,
    };

    let created = backend.create_invoice(session, &invoice).await?;

    let confirm = backend
        .update_reservation_status(session, reservation.id, ReservationStatus::Confirmed)
        .await;
    if let Err(first) = confirm {
        warn!(
            "Confirmation of reservation {} failed after invoice {}: {}; retrying",
            reservation.id, created.id, first
        );
        if backend
            .update_reservation_status(session, reservation.id, ReservationStatus::Confirmed)
            .await
            .is_err()
        {
            return Err(AppError::InvoiceFinalization {
                invoice_id: created.id,
            });
        }
    }

    Ok(IssuedInvoice {
        invoice_id: created.id,
        breakdown: quote.breakdown,
    })
}
