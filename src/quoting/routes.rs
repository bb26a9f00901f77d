//! HTTP surface for quotes and bookings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::error::Result;
use crate::AppState;

use super::requests::{BookQuoteRequest, CreateQuoteRequest};
use super::responses::{BookingResponse, QuoteResponse};
use super::services;
use super::tariff::Tariff;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/quotes", post(create_quote))
        .route("/api/quotes/:reference", get(get_quote))
        .route("/api/quotes/:reference/book", post(book_quote))
        .route("/api/tariff", get(current_tariff))
}

async fn create_quote(
    State(state): State<AppState>,
    Json(req): Json<CreateQuoteRequest>,
) -> Result<(StatusCode, Json<QuoteResponse>)> {
    let record = services::create_quote(&state.engine, &state.cache, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(QuoteResponse::from(record.as_ref())),
    ))
}

async fn get_quote(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<QuoteResponse>> {
    let record = services::get_quote(&state.cache, &reference).await?;
    Ok(Json(QuoteResponse::from(record.as_ref())))
}

async fn book_quote(
    State(state): State<AppState>,
    Path(reference): Path<String>,
    Json(req): Json<BookQuoteRequest>,
) -> Result<(StatusCode, Json<BookingResponse>)> {
    let booking = services::book_quote(&state.db, &state.cache, &reference, req).await?;
    Ok((StatusCode::CREATED, Json(BookingResponse::from(&booking))))
}

async fn current_tariff(State(state): State<AppState>) -> Json<Tariff> {
    Json(state.engine.tariff().clone())
}
