//! Quote lifecycle: validation, pricing, caching and booking.
//!
//! Handlers stay thin; every flow that touches the cache or the database
//! lives here.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::cache::AppCache;
use crate::db::queries;
use crate::error::AppError;
use crate::models::{Booking, NewBooking};

use super::engine::QuoteEngine;
use super::models::{FloorAccess, QuoteRecord, TripRequest, Urgency, VanSize};
use super::requests::{BookQuoteRequest, CreateQuoteRequest};
use super::responses::BreakdownResponse;
use super::tariff::Tariff;

/// Quote service error types.
#[derive(Debug, Clone)]
pub enum QuoteError {
    InvalidInput { field: String, message: String },
    UnknownReference { reference: String },
}

impl std::fmt::Display for QuoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteError::InvalidInput { field, message } => {
                write!(f, "Invalid {}: {}", field, message)
            }
            QuoteError::UnknownReference { reference } => {
                write!(f, "Unknown quote reference {}", reference)
            }
        }
    }
}

impl std::error::Error for QuoteError {}

fn invalid(field: &str, message: impl Into<String>) -> QuoteError {
    QuoteError::InvalidInput {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a wire DTO into a priceable trip.
///
/// Enum strings resolve leniently to their documented defaults; numeric
/// fields are checked strictly. The urban flag is settled here so the
/// engine never has to guess: an explicit flag wins, otherwise short trips
/// under the tariff threshold count as urban.
pub fn validate_request(
    tariff: &Tariff,
    req: CreateQuoteRequest,
) -> Result<TripRequest, QuoteError> {
    let pickup_address = req.pickup_address.trim().to_string();
    if pickup_address.is_empty() {
        return Err(invalid("pickup_address", "must not be empty"));
    }

    let delivery_address = req.delivery_address.trim().to_string();
    if delivery_address.is_empty() {
        return Err(invalid("delivery_address", "must not be empty"));
    }

    if req.distance_miles <= Decimal::ZERO {
        return Err(invalid("distance_miles", "must be greater than zero"));
    }
    if req.distance_miles > tariff.max_distance_miles {
        return Err(invalid(
            "distance_miles",
            format!("must not exceed {} miles", tariff.max_distance_miles),
        ));
    }

    if let Some(hours) = req.estimated_hours {
        if hours <= Decimal::ZERO {
            return Err(invalid(
                "estimated_hours",
                "must be greater than zero when supplied",
            ));
        }
    }

    let van_size = req
        .van_size
        .as_deref()
        .map(VanSize::parse_or_default)
        .unwrap_or(VanSize::Medium);
    let floor_access = req
        .floor_access
        .as_deref()
        .map(FloorAccess::parse_or_default)
        .unwrap_or(FloorAccess::Ground);
    let urgency = req
        .urgency
        .as_deref()
        .map(Urgency::parse_or_default)
        .unwrap_or(Urgency::Standard);

    let urban = req
        .urban
        .unwrap_or(req.distance_miles < tariff.urban_threshold_miles);

    Ok(TripRequest {
        pickup_address,
        delivery_address,
        distance_miles: req.distance_miles,
        van_size,
        move_date: req.move_date,
        estimated_hours: req.estimated_hours,
        helpers: req.helpers,
        floor_access,
        lift_available: req.lift_available,
        urgency,
        urban,
    })
}

/// Issue a fresh quote reference, e.g. `MV-3F9A2C41`.
pub fn new_reference() -> String {
    let id = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("MV-{}", &id[..8])
}

/// Validate, price and cache a new quote.
pub async fn create_quote(
    engine: &QuoteEngine,
    cache: &AppCache,
    req: CreateQuoteRequest,
) -> Result<Arc<QuoteRecord>, QuoteError> {
    let trip = validate_request(engine.tariff(), req)?;
    let breakdown = engine.price(&trip);

    let record = Arc::new(QuoteRecord {
        reference: new_reference(),
        created_at: Utc::now(),
        request: trip,
        breakdown,
    });

    cache
        .quotes
        .insert(record.reference.clone(), record.clone())
        .await;

    tracing::info!(
        reference = %record.reference,
        total = %record.breakdown.total,
        "quote issued"
    );

    Ok(record)
}

/// Look up a cached quote by reference.
///
/// An expired (evicted) quote is indistinguishable from one that never
/// existed.
pub async fn get_quote(cache: &AppCache, reference: &str) -> Result<Arc<QuoteRecord>, QuoteError> {
    match cache.quotes.get(reference).await {
        Some(record) => {
            tracing::debug!(reference = %reference, "quote cache hit");
            Ok(record)
        }
        None => {
            tracing::debug!(reference = %reference, "quote cache miss");
            Err(QuoteError::UnknownReference {
                reference: reference.to_string(),
            })
        }
    }
}

/// Turn a cached quote into a stored booking.
///
/// The quote stays in the cache; the booking row carries its own copy of
/// the breakdown so it survives cache eviction.
pub async fn book_quote(
    pool: &PgPool,
    cache: &AppCache,
    reference: &str,
    req: BookQuoteRequest,
) -> Result<Booking, AppError> {
    let customer_name = req.customer_name.trim().to_string();
    if customer_name.is_empty() {
        return Err(invalid("customer_name", "must not be empty").into());
    }

    let customer_email = req.customer_email.trim().to_string();
    if customer_email.is_empty() || !customer_email.contains('@') {
        return Err(invalid("customer_email", "must be a valid email address").into());
    }

    let quote = get_quote(cache, reference).await?;

    let breakdown = serde_json::to_value(BreakdownResponse::from(&quote.breakdown))
        .map_err(|e| AppError::Internal(format!("failed to serialize breakdown: {}", e)))?;

    let booking = NewBooking {
        reference: quote.reference.clone(),
        customer_name,
        customer_email,
        customer_phone: req
            .customer_phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty()),
        pickup_address: quote.request.pickup_address.clone(),
        delivery_address: quote.request.delivery_address.clone(),
        move_date: quote.request.move_date,
        van_size: quote.request.van_size.label().to_string(),
        total: quote.breakdown.total,
        breakdown,
        status: "pending_payment".to_string(),
    };

    let stored = queries::insert_booking(pool, &booking).await?;

    tracing::info!(
        reference = %stored.reference,
        customer = %stored.customer_email,
        "booking created"
    );

    Ok(stored)
}
