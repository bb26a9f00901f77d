//! Request DTOs for the quote API.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Request to price a trip and issue a quote.
///
/// Enum-ish fields arrive as free strings and resolve leniently (unknown van
/// size prices as medium, unknown floor as ground, unknown urgency as
/// standard). Numeric fields are validated in the service layer; bad numbers
/// are rejected, never defaulted.
#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    pub pickup_address: String,
    pub delivery_address: String,
    pub distance_miles: Decimal,
    #[serde(default)]
    pub van_size: Option<String>,
    /// Local wall-clock at pickup, e.g. "2025-06-11T10:00:00".
    pub move_date: NaiveDateTime,
    #[serde(default)]
    pub estimated_hours: Option<Decimal>,
    #[serde(default)]
    pub helpers: u32,
    #[serde(default)]
    pub floor_access: Option<String>,
    #[serde(default)]
    pub lift_available: bool,
    #[serde(default)]
    pub urgency: Option<String>,
    /// Explicit urban flag; derived from the tariff's distance threshold
    /// when absent.
    #[serde(default)]
    pub urban: Option<bool>,
}

/// Request to turn a cached quote into a booking.
#[derive(Debug, Deserialize)]
pub struct BookQuoteRequest {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
}

/// Query parameters for the admin booking listing.
#[derive(Debug, Deserialize)]
pub struct AdminBookingsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}
