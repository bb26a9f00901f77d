//! Domain types for the quote engine.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Van size tier.
///
/// Wire values outside the known set resolve to `Medium` rather than
/// erroring; the customer picked something, we price it at the mid tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VanSize {
    Small,
    Medium,
    Large,
    Luton,
}

impl VanSize {
    /// Parse a wire string, falling back to the documented default.
    pub fn parse_or_default(value: &str) -> Self {
        match normalize(value).as_str() {
            "small" => VanSize::Small,
            "medium" => VanSize::Medium,
            "large" => VanSize::Large,
            "luton" => VanSize::Luton,
            _ => VanSize::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VanSize::Small => "small",
            VanSize::Medium => "medium",
            VanSize::Large => "large",
            VanSize::Luton => "Luton",
        }
    }
}

/// Highest floor items are carried to or from. Unknown values resolve to
/// `Ground` (no fee).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorAccess {
    Ground,
    First,
    Second,
    ThirdPlus,
}

impl FloorAccess {
    pub fn parse_or_default(value: &str) -> Self {
        match normalize(value).as_str() {
            "ground" | "groundfloor" => FloorAccess::Ground,
            "first" | "firstfloor" => FloorAccess::First,
            "second" | "secondfloor" => FloorAccess::Second,
            "thirdplus" | "third" | "thirdfloorplus" | "thirdfloor" => FloorAccess::ThirdPlus,
            _ => FloorAccess::Ground,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FloorAccess::Ground => "ground",
            FloorAccess::First => "first",
            FloorAccess::Second => "second",
            FloorAccess::ThirdPlus => "third+",
        }
    }
}

/// Booking lead-time tier. Unknown values resolve to `Standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Standard,
    Priority,
    Express,
}

impl Urgency {
    pub fn parse_or_default(value: &str) -> Self {
        match normalize(value).as_str() {
            "standard" => Urgency::Standard,
            "priority" => Urgency::Priority,
            "express" | "sameday" => Urgency::Express,
            _ => Urgency::Standard,
        }
    }
}

/// Lowercase and strip everything but letters, so "Third Floor+", "third_plus"
/// and "thirdFloorPlus" all land on the same key.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// A validated trip, ready for pricing.
///
/// Produced by the service layer from the wire DTO; every enum has been
/// resolved, every number checked, and the urban flag settled (explicit flag
/// wins, otherwise derived from the tariff's urban distance threshold).
#[derive(Debug, Clone, Serialize)]
pub struct TripRequest {
    pub pickup_address: String,
    pub delivery_address: String,
    pub distance_miles: Decimal,
    pub van_size: VanSize,
    /// Local wall-clock at pickup.
    pub move_date: NaiveDateTime,
    pub estimated_hours: Option<Decimal>,
    pub helpers: u32,
    pub floor_access: FloorAccess,
    pub lift_available: bool,
    pub urgency: Urgency,
    pub urban: bool,
}

/// One human-readable line of the quote.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

/// The full price breakdown for a trip.
///
/// Every monetary field is rounded exactly once, to 2 dp, half away from
/// zero. The subtotal is the exact sum of the line items; VAT and the
/// platform split are computed from it, never the other way round.
#[derive(Debug, Clone)]
pub struct PriceBreakdown {
    pub distance_charge: Decimal,
    pub time_charge: Decimal,
    pub helpers_fee: Decimal,
    pub floor_access_fee: Decimal,
    pub peak_time_surcharge: Decimal,
    pub urgency_surcharge: Decimal,
    pub fuel_cost: Decimal,
    pub return_journey_cost: Decimal,
    pub congestion_charge: Decimal,

    pub subtotal: Decimal,
    pub vat: Decimal,
    pub total: Decimal,

    pub platform_fee: Decimal,
    pub driver_share: Decimal,

    pub billable_hours: Decimal,
    pub line_items: Vec<LineItem>,
    pub summary: String,
    pub tariff_version: String,
}

/// An issued quote, as held in the cache.
#[derive(Debug, Clone)]
pub struct QuoteRecord {
    pub reference: String,
    pub created_at: DateTime<Utc>,
    pub request: TripRequest,
    pub breakdown: PriceBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_van_size_parsing() {
        assert_eq!(VanSize::parse_or_default("small"), VanSize::Small);
        assert_eq!(VanSize::parse_or_default("Luton"), VanSize::Luton);
        assert_eq!(VanSize::parse_or_default("LARGE"), VanSize::Large);
        assert_eq!(VanSize::parse_or_default(" medium "), VanSize::Medium);
    }

    #[test]
    fn test_unknown_van_size_falls_back_to_medium() {
        assert_eq!(VanSize::parse_or_default("transit"), VanSize::Medium);
        assert_eq!(VanSize::parse_or_default(""), VanSize::Medium);
        assert_eq!(VanSize::parse_or_default("xl"), VanSize::Medium);
    }

    #[test]
    fn test_floor_access_parsing() {
        assert_eq!(FloorAccess::parse_or_default("ground"), FloorAccess::Ground);
        assert_eq!(FloorAccess::parse_or_default("first"), FloorAccess::First);
        assert_eq!(FloorAccess::parse_or_default("second_floor"), FloorAccess::Second);
        assert_eq!(
            FloorAccess::parse_or_default("thirdFloorPlus"),
            FloorAccess::ThirdPlus
        );
        assert_eq!(
            FloorAccess::parse_or_default("third_plus"),
            FloorAccess::ThirdPlus
        );
        assert_eq!(FloorAccess::parse_or_default("Third Floor+"), FloorAccess::ThirdPlus);
    }

    #[test]
    fn test_unknown_floor_access_falls_back_to_ground() {
        assert_eq!(FloorAccess::parse_or_default("basement"), FloorAccess::Ground);
        assert_eq!(FloorAccess::parse_or_default(""), FloorAccess::Ground);
    }

    #[test]
    fn test_urgency_parsing() {
        assert_eq!(Urgency::parse_or_default("standard"), Urgency::Standard);
        assert_eq!(Urgency::parse_or_default("Priority"), Urgency::Priority);
        assert_eq!(Urgency::parse_or_default("express"), Urgency::Express);
        assert_eq!(Urgency::parse_or_default("same-day"), Urgency::Express);
    }

    #[test]
    fn test_unknown_urgency_falls_back_to_standard() {
        assert_eq!(Urgency::parse_or_default("yesterday"), Urgency::Standard);
        assert_eq!(Urgency::parse_or_default(""), Urgency::Standard);
    }
}
