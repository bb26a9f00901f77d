//! Booking row types.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored booking.
///
/// The row carries its own JSON copy of the price breakdown, so the figures
/// the customer agreed to survive any later tariff change or cache eviction.
#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub reference: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub pickup_address: String,
    pub delivery_address: String,
    pub move_date: NaiveDateTime,
    pub van_size: String,
    pub total: Decimal,
    pub breakdown: serde_json::Value,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A booking ready to insert.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub reference: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub pickup_address: String,
    pub delivery_address: String,
    pub move_date: NaiveDateTime,
    pub van_size: String,
    pub total: Decimal,
    pub breakdown: serde_json::Value,
    pub status: String,
}
