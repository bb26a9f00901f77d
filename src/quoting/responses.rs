//! Response DTOs for the quote API.
//!
//! Money is serialized as strings so clients never see binary-float residue.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Booking;

use super::models::{LineItem, PriceBreakdown, QuoteRecord};

/// One line of the quote as shown to the customer.
#[derive(Debug, Clone, Serialize)]
pub struct LineItemResponse {
    pub label: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

impl From<&LineItem> for LineItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            label: item.label.clone(),
            amount: item.amount,
        }
    }
}

/// Full price breakdown on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub distance_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub time_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub helpers_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub floor_access_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub peak_time_surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub urgency_surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fuel_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub return_journey_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub congestion_charge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub vat: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub platform_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub driver_share: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub billable_hours: Decimal,
    pub line_items: Vec<LineItemResponse>,
    pub summary: String,
    pub tariff_version: String,
}

impl From<&PriceBreakdown> for BreakdownResponse {
    fn from(b: &PriceBreakdown) -> Self {
        Self {
            distance_charge: b.distance_charge,
            time_charge: b.time_charge,
            helpers_fee: b.helpers_fee,
            floor_access_fee: b.floor_access_fee,
            peak_time_surcharge: b.peak_time_surcharge,
            urgency_surcharge: b.urgency_surcharge,
            fuel_cost: b.fuel_cost,
            return_journey_cost: b.return_journey_cost,
            congestion_charge: b.congestion_charge,
            subtotal: b.subtotal,
            vat: b.vat,
            total: b.total,
            platform_fee: b.platform_fee,
            driver_share: b.driver_share,
            billable_hours: b.billable_hours,
            line_items: b.line_items.iter().map(LineItemResponse::from).collect(),
            summary: b.summary.clone(),
            tariff_version: b.tariff_version.clone(),
        }
    }
}

/// An issued quote.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub reference: String,
    pub created_at: DateTime<Utc>,
    pub breakdown: BreakdownResponse,
}

impl From<&QuoteRecord> for QuoteResponse {
    fn from(record: &QuoteRecord) -> Self {
        Self {
            reference: record.reference.clone(),
            created_at: record.created_at,
            breakdown: BreakdownResponse::from(&record.breakdown),
        }
    }
}

/// A stored booking.
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub reference: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub pickup_address: String,
    pub delivery_address: String,
    pub move_date: NaiveDateTime,
    pub van_size: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            reference: booking.reference.clone(),
            customer_name: booking.customer_name.clone(),
            customer_email: booking.customer_email.clone(),
            customer_phone: booking.customer_phone.clone(),
            pickup_address: booking.pickup_address.clone(),
            delivery_address: booking.delivery_address.clone(),
            move_date: booking.move_date,
            van_size: booking.van_size.clone(),
            total: booking.total,
            status: booking.status.clone(),
            created_at: booking.created_at,
        }
    }
}
