//! Availability and reservation route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};

use crate::backend::Session;
use crate::error::Result;
use crate::models::Reservation;
use crate::AppState;

use super::requests::{CheckAvailabilityRequest, PlaceReservationRequest, UpdateStatusRequest};
use super::responses::AvailabilityResponse;
use super::services;

pub fn router() -> Router<AppState> {
    Router::new().route("/check", post(check))
}

pub fn reservations_router() -> Router<AppState> {
    Router::new()
        .route("/", post(place))
        .route("/:id/status", put(update_status))
}

/// Report whether a candidate window conflicts with an existing reservation.
async fn check(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CheckAvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>> {
    let outcome = services::check_availability(
        &state.backend,
        &session,
        request.resource_kind,
        request.resource_id,
        request.start_date,
        request.end_date,
        request.exclude_reservation_id,
    )
    .await?;

    Ok(Json(AvailabilityResponse {
        available: outcome.available,
        conflict: outcome.conflict,
    }))
}

/// Place a reservation after the conflict scan passes.
async fn place(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<PlaceReservationRequest>,
) -> Result<Json<Reservation>> {
    let created = services::place_reservation(&state.backend, &session, request).await?;
    Ok(Json(created))
}

/// Change a reservation's status.
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    session: Session,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<StatusCode> {
    services::update_status(&state.backend, &session, id, request.status).await?;
    Ok(StatusCode::NO_CONTENT)
}
