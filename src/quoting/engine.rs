//! Quote engine: composes the calculators into a full breakdown.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::calculators::{
    billable_hours, congestion_charge, distance_charge, floor_access_fee, fuel_cost, helpers_fee,
    peak_rate, peak_time_surcharge, return_journey_cost, round_money, time_charge,
    urgency_surcharge, vat,
};
use super::holidays::{EnglandWalesCalendar, HolidayCalendar};
use super::models::{LineItem, PriceBreakdown, TripRequest, Urgency};
use super::tariff::Tariff;
use super::zones::{CentralLondonZone, CongestionZone};

/// The quote engine.
///
/// Holds the single tariff copy plus the injected holiday calendar and
/// congestion-zone predicate. Pricing is deterministic: the same request
/// always produces the same breakdown, with no hidden clock.
pub struct QuoteEngine {
    tariff: Tariff,
    holidays: Arc<dyn HolidayCalendar>,
    congestion: Arc<dyn CongestionZone>,
}

impl QuoteEngine {
    pub fn new(tariff: Tariff) -> Self {
        Self {
            tariff,
            holidays: Arc::new(EnglandWalesCalendar),
            congestion: Arc::new(CentralLondonZone),
        }
    }

    pub fn with_holiday_calendar(mut self, holidays: Arc<dyn HolidayCalendar>) -> Self {
        self.holidays = holidays;
        self
    }

    pub fn with_congestion_zone(mut self, congestion: Arc<dyn CongestionZone>) -> Self {
        self.congestion = congestion;
        self
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Price a validated trip.
    pub fn price(&self, req: &TripRequest) -> PriceBreakdown {
        let tariff = &self.tariff;

        let hours = billable_hours(tariff, req.estimated_hours, req.distance_miles);

        let distance = distance_charge(tariff, req.distance_miles, req.van_size, req.urban);
        let time = time_charge(tariff, req.van_size, hours);
        let helpers = helpers_fee(tariff, req.helpers, hours);

        // Surcharges apply to the labour base only, so fuel, the return leg
        // and congestion never compound a multiplier.
        let labour_base = distance + time + helpers;

        let floor = floor_access_fee(tariff, req.floor_access, req.lift_available);
        let peak = peak_time_surcharge(tariff, self.holidays.as_ref(), req.move_date, labour_base);
        let urgency = urgency_surcharge(tariff, req.urgency, labour_base);
        let fuel = fuel_cost(tariff, req.distance_miles, req.van_size);
        let return_leg = return_journey_cost(tariff, req.distance_miles, req.van_size);
        let congestion = congestion_charge(
            self.congestion.as_ref(),
            tariff,
            &req.pickup_address,
            &req.delivery_address,
        );

        // Every term is already a 2 dp value, so the subtotal is an exact
        // sum and is never re-rounded.
        let subtotal =
            distance + time + helpers + floor + peak + urgency + fuel + return_leg + congestion;

        let vat_amount = vat(tariff, subtotal);
        let total = subtotal + vat_amount;

        let platform_fee = round_money(subtotal * tariff.platform_pct);
        let driver_share = subtotal - platform_fee;

        let line_items = self.line_items(
            req, hours, distance, time, helpers, floor, peak, urgency, fuel, return_leg, congestion,
        );
        let summary = self.summary(req, hours, total);

        PriceBreakdown {
            distance_charge: distance,
            time_charge: time,
            helpers_fee: helpers,
            floor_access_fee: floor,
            peak_time_surcharge: peak,
            urgency_surcharge: urgency,
            fuel_cost: fuel,
            return_journey_cost: return_leg,
            congestion_charge: congestion,
            subtotal,
            vat: vat_amount,
            total,
            platform_fee,
            driver_share,
            billable_hours: hours,
            line_items,
            summary,
            tariff_version: tariff.version.clone(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn line_items(
        &self,
        req: &TripRequest,
        hours: Decimal,
        distance: Decimal,
        time: Decimal,
        helpers: Decimal,
        floor: Decimal,
        peak: Decimal,
        urgency: Decimal,
        fuel: Decimal,
        return_leg: Decimal,
        congestion: Decimal,
    ) -> Vec<LineItem> {
        let mut items = vec![
            LineItem {
                label: format!(
                    "Distance ({} miles, {} van)",
                    req.distance_miles,
                    req.van_size.label()
                ),
                amount: distance,
            },
            LineItem {
                label: format!("Time ({} hours)", hours),
                amount: time,
            },
        ];

        if helpers > Decimal::ZERO {
            items.push(LineItem {
                label: format!("Helpers ({} x {} hours)", req.helpers, hours),
                amount: helpers,
            });
        }
        if floor > Decimal::ZERO {
            let note = if req.lift_available { ", lift available" } else { "" };
            items.push(LineItem {
                label: format!("Floor access ({} floor{})", req.floor_access.label(), note),
                amount: floor,
            });
        }
        if peak > Decimal::ZERO {
            let reason = peak_rate(&self.tariff, self.holidays.as_ref(), req.move_date)
                .map(|(r, _)| r.label())
                .unwrap_or("peak time");
            items.push(LineItem {
                label: format!("Peak time ({})", reason),
                amount: peak,
            });
        }
        if urgency > Decimal::ZERO {
            let tier = match req.urgency {
                Urgency::Priority => "priority",
                Urgency::Express => "express",
                Urgency::Standard => "standard",
            };
            items.push(LineItem {
                label: format!("Urgency ({})", tier),
                amount: urgency,
            });
        }

        items.push(LineItem {
            label: "Fuel".to_string(),
            amount: fuel,
        });

        if return_leg > Decimal::ZERO {
            items.push(LineItem {
                label: "Return journey".to_string(),
                amount: return_leg,
            });
        }
        if congestion > Decimal::ZERO {
            items.push(LineItem {
                label: "Congestion charge".to_string(),
                amount: congestion,
            });
        }

        items
    }

    fn summary(&self, req: &TripRequest, hours: Decimal, total: Decimal) -> String {
        format!(
            "{} van, {} miles, {} billable hours with {} helper(s). Total GBP {} inc. VAT.",
            req.van_size.label(),
            req.distance_miles,
            hours,
            req.helpers,
            total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quoting::models::{FloorAccess, VanSize};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn engine() -> QuoteEngine {
        QuoteEngine::new(Tariff::published())
    }

    fn weekday_request() -> TripRequest {
        TripRequest {
            pickup_address: "14 Mill Road, Cambridge CB1 2AD".to_string(),
            delivery_address: "3 Rose Crescent, Cambridge CB2 3LL".to_string(),
            distance_miles: dec!(10),
            van_size: VanSize::Medium,
            // Wednesday 11 Jun 2025, 10:00
            move_date: NaiveDate::from_ymd_opt(2025, 6, 11)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            estimated_hours: Some(dec!(2)),
            helpers: 0,
            floor_access: FloorAccess::Ground,
            lift_available: false,
            urgency: Urgency::Standard,
            urban: true,
        }
    }

    #[test]
    fn test_weekday_daytime_scenario() {
        let breakdown = engine().price(&weekday_request());

        assert!(breakdown.distance_charge > Decimal::ZERO);
        assert!(breakdown.time_charge > Decimal::ZERO);
        assert_eq!(breakdown.floor_access_fee, Decimal::ZERO);
        assert_eq!(breakdown.peak_time_surcharge, Decimal::ZERO);
        assert_eq!(breakdown.urgency_surcharge, Decimal::ZERO);
        assert!(breakdown.total > breakdown.subtotal);
    }

    #[test]
    fn test_subtotal_is_sum_of_line_items() {
        let breakdown = engine().price(&weekday_request());
        let sum: Decimal = breakdown.line_items.iter().map(|item| item.amount).sum();
        assert_eq!(sum, breakdown.subtotal);
    }

    #[test]
    fn test_commission_partitions_subtotal() {
        let breakdown = engine().price(&weekday_request());
        assert_eq!(
            breakdown.platform_fee + breakdown.driver_share,
            breakdown.subtotal
        );
        assert!(breakdown.platform_fee > Decimal::ZERO);
        assert!(breakdown.driver_share > breakdown.platform_fee);
    }

    #[test]
    fn test_total_is_subtotal_plus_vat() {
        let e = engine();
        let breakdown = e.price(&weekday_request());
        assert_eq!(
            breakdown.vat,
            round_money(breakdown.subtotal * e.tariff().vat_rate)
        );
        assert_eq!(breakdown.total, breakdown.subtotal + breakdown.vat);
        // 2 dp clean: scale never exceeds cents
        assert!(breakdown.total.scale() <= 2);
        assert!(breakdown.subtotal.scale() <= 2);
    }

    #[test]
    fn test_pricing_is_idempotent() {
        let e = engine();
        let req = weekday_request();
        let first = e.price(&req);
        let second = e.price(&req);
        assert_eq!(first.total, second.total);
        assert_eq!(first.subtotal, second.subtotal);
        assert_eq!(first.line_items, second.line_items);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_express_costs_more_than_standard() {
        let e = engine();
        let standard = e.price(&weekday_request());
        let mut req = weekday_request();
        req.urgency = Urgency::Express;
        let express = e.price(&req);
        assert!(express.total > standard.total);
        assert!(express.urgency_surcharge > Decimal::ZERO);
    }

    #[test]
    fn test_lift_reduces_floor_fee_but_not_below_zero() {
        let e = engine();
        let mut req = weekday_request();
        req.floor_access = FloorAccess::ThirdPlus;

        req.lift_available = false;
        let without = e.price(&req);
        req.lift_available = true;
        let with = e.price(&req);

        assert!(with.floor_access_fee < without.floor_access_fee);
        assert!(with.floor_access_fee >= Decimal::ZERO);
    }

    #[test]
    fn test_distance_monotonicity() {
        let e = engine();
        let mut last_distance = Decimal::ZERO;
        let mut last_fuel = Decimal::ZERO;
        let mut last_return = Decimal::ZERO;
        for miles in [5, 20, 45, 80, 200, 500] {
            let mut req = weekday_request();
            req.distance_miles = Decimal::from(miles);
            req.urban = false;
            let b = e.price(&req);
            assert!(b.distance_charge >= last_distance);
            assert!(b.fuel_cost >= last_fuel);
            assert!(b.return_journey_cost >= last_return);
            last_distance = b.distance_charge;
            last_fuel = b.fuel_cost;
            last_return = b.return_journey_cost;
        }
    }

    #[test]
    fn test_weekend_move_carries_peak_surcharge() {
        let e = engine();
        let mut req = weekday_request();
        // Saturday 14 Jun 2025
        req.move_date = NaiveDate::from_ymd_opt(2025, 6, 14)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let b = e.price(&req);
        assert!(b.peak_time_surcharge > Decimal::ZERO);
        assert!(b
            .line_items
            .iter()
            .any(|item| item.label.contains("weekend")));
    }

    #[test]
    fn test_london_trip_pays_congestion() {
        let e = engine();
        let mut req = weekday_request();
        req.delivery_address = "1 Borough High St, London SE1 1LB".to_string();
        let b = e.price(&req);
        assert_eq!(b.congestion_charge, e.tariff().congestion_charge);
        assert!(b
            .line_items
            .iter()
            .any(|item| item.label == "Congestion charge"));
    }

    #[test]
    fn test_no_negative_fields_ever() {
        let e = engine();
        let mut req = weekday_request();
        req.helpers = 3;
        req.floor_access = FloorAccess::ThirdPlus;
        req.lift_available = true;
        let b = e.price(&req);
        for amount in [
            b.distance_charge,
            b.time_charge,
            b.helpers_fee,
            b.floor_access_fee,
            b.peak_time_surcharge,
            b.urgency_surcharge,
            b.fuel_cost,
            b.return_journey_cost,
            b.congestion_charge,
            b.subtotal,
            b.vat,
            b.total,
            b.platform_fee,
            b.driver_share,
        ] {
            assert!(amount >= Decimal::ZERO);
        }
    }
}
