//! Billing route handlers

use axum::{extract::State, routing::post, Json, Router};

use crate::backend::Session;
use crate::error::Result;
use crate::AppState;

use super::requests::{IssueInvoiceRequest, QuoteRequest};
use super::responses::{InvoiceResponse, QuoteResponse};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/invoice", post(invoice))
}

/// Compute and return the breakdown for a reservation, without billing.
async fn quote(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let quote = services::quote_reservation(
        &state.backend,
        &session,
        request.reservation_id,
        request.discount,
        request.discount_kind,
        request.tax_rate,
    )
    .await?;

    Ok(Json(QuoteResponse::from_breakdown(
        request.reservation_id,
        &quote.breakdown,
    )))
}

/// Issue the invoice for a reservation and confirm it.
async fn invoice(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<IssueInvoiceRequest>,
) -> Result<Json<InvoiceResponse>> {
    let issued = services::issue_invoice(
        &state.backend,
        &session,
        request.reservation_id,
        request.user_id,
        request.discount,
        request.discount_kind,
        request.tax_rate,
    )
    .await?;

    Ok(Json(InvoiceResponse {
        invoice_id: issued.invoice_id,
        quote: QuoteResponse::from_breakdown(request.reservation_id, &issued.breakdown),
    }))
}
