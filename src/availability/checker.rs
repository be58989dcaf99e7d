//! Date-range conflict logic for reservations.
//!
//! Pure functions - the caller supplies the reservation snapshot and
//! today's date.

use chrono::NaiveDate;

use crate::models::{Reservation, ResourceKind};

/// Validation failures for a candidate booking window, distinct from
/// resource conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// Start date lies before today (date-only comparison).
    StartInPast,
    /// End date lies before the start date.
    EndBeforeStart,
}

/// Closed-interval overlap test on calendar dates. Ranges sharing a single
/// boundary day overlap.
pub fn ranges_overlap(
    start_a: NaiveDate,
    end_a: NaiveDate,
    start_b: NaiveDate,
    end_b: NaiveDate,
) -> bool {
    start_a <= end_b && end_a >= start_b
}

/// Check a candidate window's temporal ordering against `today`.
pub fn validate_window(
    today: NaiveDate,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), WindowError> {
    if start < today {
        return Err(WindowError::StartInPast);
    }
    if end < start {
        return Err(WindowError::EndBeforeStart);
    }
    Ok(())
}

/// Scan `existing` for a reservation that blocks the candidate range.
///
/// A reservation blocks when it holds the same resource, is pending or
/// confirmed (cancelled never blocks), is not the reservation being edited,
/// and its range overlaps the candidate's. Linear scan over the snapshot.
pub fn find_conflict<'a>(
    existing: &'a [Reservation],
    kind: ResourceKind,
    resource_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    exclude_id: Option<i64>,
) -> Option<&'a Reservation> {
    existing.iter().find(|reservation| {
        reservation.resource_kind == kind
            && reservation.resource_id == resource_id
            && reservation.status.is_blocking()
            && exclude_id != Some(reservation.id)
            && ranges_overlap(start, end, reservation.start_date, reservation.end_date)
    })
}
