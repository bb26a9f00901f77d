//! Core pricing calculation functions.
//!
//! Pure functions for quote math - no I/O, no shared state. Every function
//! takes the tariff explicitly and returns an exact `Decimal`; monetary
//! results are rounded exactly once, on the value that ends up in the
//! breakdown, never on intermediates.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::holidays::HolidayCalendar;
use super::models::{FloorAccess, Urgency, VanSize};
use super::tariff::Tariff;
use super::zones::CongestionZone;

/// Round a monetary amount to 2 decimal places, half away from zero.
///
/// This is the only rounding the engine performs, and it happens once per
/// published field.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use movevan_web::quoting::round_money;
///
/// assert_eq!(round_money(dec!(19.995)), dec!(20.00));
/// assert_eq!(round_money(dec!(19.994)), dec!(19.99));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Billable hours for a trip.
///
/// Supplied hours cover loading and handling; driving time is added on top
/// at the tariff's assumed average speed, and the whole thing is floored at
/// the minimum callout. Rounded to 2 dp for display and charging alike.
pub fn billable_hours(tariff: &Tariff, estimated_hours: Option<Decimal>, distance: Decimal) -> Decimal {
    let handling = estimated_hours.unwrap_or(Decimal::ZERO);
    let driving = distance / tariff.assumed_speed_mph;
    let hours = (handling + driving).max(tariff.min_billable_hours);
    hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Base fare plus mileage at the van's per-mile rate.
///
/// The urban multiplier applies to the per-mile rate only, never the base
/// fare.
pub fn distance_charge(tariff: &Tariff, distance: Decimal, van: VanSize, urban: bool) -> Decimal {
    let mut per_mile = tariff.van_rates(van).per_mile;
    if urban {
        per_mile *= tariff.urban_multiplier;
    }
    round_money(tariff.base_fare + distance * per_mile)
}

/// Hourly rate for the van size over the billable hours.
pub fn time_charge(tariff: &Tariff, van: VanSize, hours: Decimal) -> Decimal {
    round_money(tariff.van_rates(van).hourly * hours)
}

/// Helpers are billed per helper, per billable hour.
pub fn helpers_fee(tariff: &Tariff, helpers: u32, hours: Decimal) -> Decimal {
    if helpers == 0 {
        return Decimal::ZERO;
    }
    round_money(Decimal::from(helpers) * tariff.helper_hourly * hours)
}

/// Fixed fee per floor tier, less the lift discount when a lift is
/// available, floored at zero.
pub fn floor_access_fee(tariff: &Tariff, floor: FloorAccess, lift_available: bool) -> Decimal {
    let fee = tariff.floor_fee(floor);
    if fee == Decimal::ZERO {
        return Decimal::ZERO;
    }
    let fee = if lift_available {
        (fee - tariff.lift_discount).max(Decimal::ZERO)
    } else {
        fee
    };
    round_money(fee)
}

/// Why a peak multiplier applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeakReason {
    Holiday,
    Weekend,
    Evening,
}

impl PeakReason {
    pub fn label(&self) -> &'static str {
        match self {
            PeakReason::Holiday => "bank holiday",
            PeakReason::Weekend => "weekend",
            PeakReason::Evening => "evening",
        }
    }
}

/// The single applicable peak multiplier for a pickup time, if any.
///
/// Weekend, evening and holiday multipliers never stack; the highest one
/// wins. Returns `None` on an ordinary weekday daytime pickup.
pub fn peak_rate(
    tariff: &Tariff,
    holidays: &dyn HolidayCalendar,
    at: NaiveDateTime,
) -> Option<(PeakReason, Decimal)> {
    let mut best: Option<(PeakReason, Decimal)> = None;

    let mut consider = |reason: PeakReason, multiplier: Decimal| {
        if multiplier > Decimal::ONE && best.map_or(true, |(_, m)| multiplier > m) {
            best = Some((reason, multiplier));
        }
    };

    if holidays.is_public_holiday(at.date()) {
        consider(PeakReason::Holiday, tariff.holiday_multiplier);
    }
    if matches!(at.weekday(), Weekday::Sat | Weekday::Sun) {
        consider(PeakReason::Weekend, tariff.weekend_multiplier);
    }
    if at.hour() >= tariff.evening_start_hour {
        consider(PeakReason::Evening, tariff.evening_multiplier);
    }

    best
}

/// Peak-time surcharge against the labour base (distance + time + helpers
/// charges; never fuel, return leg or congestion).
///
/// Exactly zero when no peak multiplier applies.
pub fn peak_time_surcharge(
    tariff: &Tariff,
    holidays: &dyn HolidayCalendar,
    at: NaiveDateTime,
    labour_base: Decimal,
) -> Decimal {
    match peak_rate(tariff, holidays, at) {
        Some((_, multiplier)) => round_money(labour_base * (multiplier - Decimal::ONE)),
        None => Decimal::ZERO,
    }
}

/// Urgency surcharge against the same labour base. Standard urgency is
/// exactly zero.
pub fn urgency_surcharge(tariff: &Tariff, urgency: Urgency, labour_base: Decimal) -> Decimal {
    let multiplier = tariff.urgency_multiplier(urgency);
    if multiplier <= Decimal::ONE {
        return Decimal::ZERO;
    }
    round_money(labour_base * (multiplier - Decimal::ONE))
}

/// Fuel for the outbound leg: gallons burned at the van's mpg, priced per
/// litre.
pub fn fuel_cost(tariff: &Tariff, distance: Decimal, van: VanSize) -> Decimal {
    let gallons = distance / tariff.van_rates(van).mpg;
    round_money(gallons * tariff.litres_per_gallon * tariff.fuel_price_per_litre)
}

/// Compensation for the empty return leg: a distance-banded fraction of the
/// one-way mileage charge (mileage only, no base fare, no urban uplift).
pub fn return_journey_cost(tariff: &Tariff, distance: Decimal, van: VanSize) -> Decimal {
    let mileage = distance * tariff.van_rates(van).per_mile;
    round_money(mileage * tariff.return_factor(distance))
}

/// Flat congestion charge when either address sits in a charging zone.
pub fn congestion_charge(
    zone: &dyn CongestionZone,
    tariff: &Tariff,
    pickup: &str,
    delivery: &str,
) -> Decimal {
    if zone.covers(pickup) || zone.covers(delivery) {
        tariff.congestion_charge
    } else {
        Decimal::ZERO
    }
}

/// VAT due on a pre-VAT subtotal.
pub fn vat(tariff: &Tariff, subtotal: Decimal) -> Decimal {
    round_money(subtotal * tariff.vat_rate)
}

/// Gross price: subtotal plus VAT.
pub fn price_with_vat(tariff: &Tariff, subtotal: Decimal) -> Decimal {
    subtotal + vat(tariff, subtotal)
}
