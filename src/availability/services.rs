//! Availability service functions backed by the hotel backend.
//!
//! Each operation fetches a fresh reservation snapshot and runs the pure
//! checker over it. The check-then-create sequence has no server-side
//! lock; commit-time exclusion is the backend's side of the contract.

use chrono::{Local, NaiveDate};

use crate::backend::{BackendClient, Session};
use crate::error::{AppError, Result};
use crate::models::{
    ExtraServiceLine, NewReservation, NewServiceLine, Reservation, ReservationStatus, ResourceKind,
};

use super::checker::{find_conflict, validate_window, WindowError};
use super::requests::{PlaceReservationRequest, ServiceSelection};

/// Result of a conflict scan for one candidate window.
#[derive(Debug, Clone)]
pub struct AvailabilityOutcome {
    pub available: bool,
    pub conflict: Option<Reservation>,
}

/// Check whether a candidate window is free on its resource.
pub async fn check_availability(
    backend: &BackendClient,
    session: &Session,
    kind: ResourceKind,
    resource_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    exclude_reservation_id: Option<i64>,
) -> Result<AvailabilityOutcome> {
    validate_window(Local::now().date_naive(), start, end).map_err(window_validation_error)?;

    let existing = backend.reservations(session).await?;
    let conflict =
        find_conflict(&existing, kind, resource_id, start, end, exclude_reservation_id).cloned();

    Ok(AvailabilityOutcome {
        available: conflict.is_none(),
        conflict,
    })
}

/// Place a reservation: validate the window, scan for conflicts, create the
/// reservation, then attach each selected service line with its total fixed
/// at selection time. New reservations start out pending.
pub async fn place_reservation(
    backend: &BackendClient,
    session: &Session,
    request: PlaceReservationRequest,
) -> Result<Reservation> {
    validate_window(
        Local::now().date_naive(),
        request.start_date,
        request.end_date,
    )
    .map_err(window_validation_error)?;

    let existing = backend.reservations(session).await?;
    if find_conflict(
        &existing,
        request.resource_kind,
        request.resource_id,
        request.start_date,
        request.end_date,
        None,
    )
    .is_some()
    {
        return Err(AppError::Conflict(format!(
            "The selected {} is not available for the requested dates",
            request.resource_kind.label()
        )));
    }

    let new_reservation = NewReservation {
        client_id: request.client_id,
        resource_kind: request.resource_kind,
        resource_id: request.resource_id,
        start_date: request.start_date,
        end_date: request.end_date,
        start_time: request.start_time,
        end_time: request.end_time,
        guest_count: request.guest_count,
        comments: request.comments,
        status: ReservationStatus::Pending,
    };
    let created = backend.create_reservation(session, &new_reservation).await?;

    for selection in &request.services {
        let line = NewServiceLine {
            reservation_id: created.id,
            line: priced_line(selection),
        };
        backend.attach_service_line(session, &line).await?;
    }

    Ok(created)
}

/// Forward a status change to the backend. Transitions are not guarded:
/// confirmed and cancelled reservations may be moved again.
pub async fn update_status(
    backend: &BackendClient,
    session: &Session,
    reservation_id: i64,
    status: ReservationStatus,
) -> Result<()> {
    backend
        .update_reservation_status(session, reservation_id, status)
        .await
}

fn priced_line(selection: &ServiceSelection) -> ExtraServiceLine {
    ExtraServiceLine::priced(selection.service_id, selection.quantity, selection.unit_price)
}

fn window_validation_error(error: WindowError) -> AppError {
    let message = match error {
        WindowError::StartInPast => "Start date cannot be before today",
        WindowError::EndBeforeStart => "End date cannot be before the start date",
    };
    AppError::Validation(message.to_string())
}
