//! The MoveVan pricing tariff.
//!
//! One versioned, authoritative table of every constant the calculators use.
//! The engine owns a single copy loaded at startup; nothing mutates it after
//! that, and no module keeps its own private copy of a rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::models::{FloorAccess, Urgency, VanSize};

/// Per-van-size rates: what we charge per mile and per hour, and what the
/// van burns getting there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VanRates {
    pub per_mile: Decimal,
    pub hourly: Decimal,
    pub mpg: Decimal,
}

/// Fixed fee per floor tier. Ground floor is always free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorFees {
    pub first: Decimal,
    pub second: Decimal,
    pub third_plus: Decimal,
}

/// Return-journey factor band, keyed by one-way distance.
///
/// `up_to_miles: None` marks the open-ended final band. Bands are matched in
/// order, first fit wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnBand {
    pub up_to_miles: Option<Decimal>,
    pub factor: Decimal,
}

/// The complete pricing tariff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tariff {
    /// Version label quoted back on every breakdown.
    pub version: String,

    pub base_fare: Decimal,
    pub small: VanRates,
    pub medium: VanRates,
    pub large: VanRates,
    pub luton: VanRates,

    pub helper_hourly: Decimal,

    pub floor_fees: FloorFees,
    pub lift_discount: Decimal,

    /// Peak multipliers. Applied against the labour base (distance + time +
    /// helpers charges), highest single multiplier wins.
    pub weekend_multiplier: Decimal,
    pub evening_multiplier: Decimal,
    pub holiday_multiplier: Decimal,
    /// Pickups at or after this local hour count as evening.
    pub evening_start_hour: u32,

    pub priority_multiplier: Decimal,
    pub express_multiplier: Decimal,

    pub litres_per_gallon: Decimal,
    pub fuel_price_per_litre: Decimal,

    pub return_bands: Vec<ReturnBand>,

    pub congestion_charge: Decimal,

    pub urban_multiplier: Decimal,
    pub urban_threshold_miles: Decimal,

    pub assumed_speed_mph: Decimal,
    pub min_billable_hours: Decimal,
    pub max_distance_miles: Decimal,

    /// Platform's cut of the pre-VAT subtotal; the driver keeps the rest.
    pub platform_pct: Decimal,
    pub vat_rate: Decimal,
}

impl Tariff {
    /// The currently published tariff.
    pub fn published() -> Self {
        Self {
            version: "2025-04".to_string(),

            base_fare: dec!(25.00),
            small: VanRates {
                per_mile: dec!(1.20),
                hourly: dec!(35.00),
                mpg: dec!(38),
            },
            medium: VanRates {
                per_mile: dec!(1.50),
                hourly: dec!(45.00),
                mpg: dec!(32),
            },
            large: VanRates {
                per_mile: dec!(1.80),
                hourly: dec!(55.00),
                mpg: dec!(26),
            },
            luton: VanRates {
                per_mile: dec!(2.20),
                hourly: dec!(65.00),
                mpg: dec!(21),
            },

            helper_hourly: dec!(25.00),

            floor_fees: FloorFees {
                first: dec!(20.00),
                second: dec!(35.00),
                third_plus: dec!(50.00),
            },
            lift_discount: dec!(15.00),

            weekend_multiplier: dec!(1.15),
            evening_multiplier: dec!(1.10),
            holiday_multiplier: dec!(1.25),
            evening_start_hour: 18,

            priority_multiplier: dec!(1.15),
            express_multiplier: dec!(1.30),

            litres_per_gallon: dec!(4.546),
            fuel_price_per_litre: dec!(1.45),

            return_bands: vec![
                ReturnBand {
                    up_to_miles: Some(dec!(50)),
                    factor: dec!(0.25),
                },
                ReturnBand {
                    up_to_miles: Some(dec!(150)),
                    factor: dec!(0.40),
                },
                ReturnBand {
                    up_to_miles: None,
                    factor: dec!(0.60),
                },
            ],

            congestion_charge: dec!(15.00),

            urban_multiplier: dec!(1.20),
            urban_threshold_miles: dec!(30),

            assumed_speed_mph: dec!(30),
            min_billable_hours: dec!(2),
            max_distance_miles: dec!(1000),

            platform_pct: dec!(0.25),
            vat_rate: dec!(0.20),
        }
    }

    /// Rates for a van size.
    pub fn van_rates(&self, van: VanSize) -> &VanRates {
        match van {
            VanSize::Small => &self.small,
            VanSize::Medium => &self.medium,
            VanSize::Large => &self.large,
            VanSize::Luton => &self.luton,
        }
    }

    /// Fixed floor-access fee before any lift discount.
    pub fn floor_fee(&self, floor: FloorAccess) -> Decimal {
        match floor {
            FloorAccess::Ground => Decimal::ZERO,
            FloorAccess::First => self.floor_fees.first,
            FloorAccess::Second => self.floor_fees.second,
            FloorAccess::ThirdPlus => self.floor_fees.third_plus,
        }
    }

    /// Urgency multiplier for a tier. Standard is 1.0 (no surcharge).
    pub fn urgency_multiplier(&self, urgency: Urgency) -> Decimal {
        match urgency {
            Urgency::Standard => Decimal::ONE,
            Urgency::Priority => self.priority_multiplier,
            Urgency::Express => self.express_multiplier,
        }
    }

    /// Return-journey factor for a one-way distance.
    pub fn return_factor(&self, distance: Decimal) -> Decimal {
        for band in &self.return_bands {
            match band.up_to_miles {
                Some(limit) if distance <= limit => return band.factor,
                None => return band.factor,
                _ => {}
            }
        }
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_tariff_is_sane() {
        let t = Tariff::published();
        assert!(!t.version.is_empty());
        assert!(t.base_fare > Decimal::ZERO);
        assert!(t.vat_rate > Decimal::ZERO && t.vat_rate < Decimal::ONE);
        assert!(t.platform_pct > Decimal::ZERO && t.platform_pct < Decimal::ONE);

        // Per-mile and hourly rates rise with van size
        assert!(t.small.per_mile < t.medium.per_mile);
        assert!(t.medium.per_mile < t.large.per_mile);
        assert!(t.large.per_mile < t.luton.per_mile);
        assert!(t.small.hourly < t.luton.hourly);

        // Bigger vans burn more fuel
        assert!(t.small.mpg > t.luton.mpg);
    }

    #[test]
    fn test_floor_fee_tiers() {
        let t = Tariff::published();
        assert_eq!(t.floor_fee(FloorAccess::Ground), Decimal::ZERO);
        assert!(t.floor_fee(FloorAccess::First) < t.floor_fee(FloorAccess::Second));
        assert!(t.floor_fee(FloorAccess::Second) < t.floor_fee(FloorAccess::ThirdPlus));
    }

    #[test]
    fn test_return_factor_bands() {
        let t = Tariff::published();
        assert_eq!(t.return_factor(dec!(10)), dec!(0.25));
        assert_eq!(t.return_factor(dec!(50)), dec!(0.25));
        assert_eq!(t.return_factor(dec!(50.1)), dec!(0.40));
        assert_eq!(t.return_factor(dec!(150)), dec!(0.40));
        assert_eq!(t.return_factor(dec!(500)), dec!(0.60));
    }

    #[test]
    fn test_urgency_multipliers() {
        let t = Tariff::published();
        assert_eq!(t.urgency_multiplier(Urgency::Standard), Decimal::ONE);
        assert!(t.urgency_multiplier(Urgency::Priority) > Decimal::ONE);
        assert!(t.urgency_multiplier(Urgency::Express) > t.urgency_multiplier(Urgency::Priority));
    }

    #[test]
    fn test_tariff_json_round_trip() {
        let t = Tariff::published();
        let json = serde_json::to_string(&t).unwrap();
        let back: Tariff = serde_json::from_str(&json).unwrap();
        assert_eq!(back.version, t.version);
        assert_eq!(back.base_fare, t.base_fare);
        assert_eq!(back.luton.per_mile, t.luton.per_mile);
        assert_eq!(back.return_bands.len(), t.return_bands.len());
        assert_eq!(back.vat_rate, t.vat_rate);
    }
}
