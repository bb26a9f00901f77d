//! Admin endpoints for booking oversight.
//!
//! Auth is handled upstream by the reverse proxy; these handlers trust the
//! caller.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::db::queries;
use crate::error::Result;
use crate::quoting::requests::AdminBookingsQuery;
use crate::quoting::responses::BookingResponse;
use crate::AppState;

/// List recent bookings, most recent first.
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<AdminBookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>> {
    let limit = query.limit.clamp(1, 200);
    let bookings = queries::recent_bookings(&state.db, limit).await?;
    Ok(Json(bookings.iter().map(BookingResponse::from).collect()))
}

/// Fetch a single booking by reference.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<BookingResponse>> {
    let booking = queries::get_booking(&state.db, &reference).await?;
    Ok(Json(BookingResponse::from(&booking)))
}
