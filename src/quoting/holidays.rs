//! UK public-holiday detection.
//!
//! The peak-time surcharge needs to know whether a pickup lands on a bank
//! holiday. Rather than hardcode one year's list, the calendar is a trait so
//! a feed-backed implementation can replace the rule-based one without
//! touching pricing.
//!
//! The shipped `EnglandWalesCalendar` derives the observed dates from the
//! standard rules: fixed-date holidays shift off weekends, the Easter pair
//! comes from the Gregorian computus, and the May/August holidays are
//! first/last Mondays. One-off proclaimed holidays (royal events, jubilees)
//! are not modelled, so Easter-adjacent and proclaimed dates are best-effort.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Source of public-holiday truth for surcharge purposes.
pub trait HolidayCalendar: Send + Sync {
    fn is_public_holiday(&self, date: NaiveDate) -> bool;
}

/// Rule-based England & Wales bank holiday calendar.
#[derive(Debug, Clone, Default)]
pub struct EnglandWalesCalendar;

impl HolidayCalendar for EnglandWalesCalendar {
    fn is_public_holiday(&self, date: NaiveDate) -> bool {
        holidays_for_year(date.year()).contains(&date)
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Observed bank holiday dates for a year.
pub fn holidays_for_year(year: i32) -> Vec<NaiveDate> {
    let mut observed: Vec<NaiveDate> = Vec::with_capacity(8);

    // Fixed-date holidays shift to the next free weekday when they fall on a
    // weekend. Christmas and Boxing Day are handled as a pair so the second
    // substitute never collides with the first.
    for fixed in [ymd(year, 1, 1), ymd(year, 12, 25), ymd(year, 12, 26)] {
        let mut candidate = fixed;
        while is_weekend(candidate) || observed.contains(&candidate) {
            candidate += Duration::days(1);
        }
        observed.push(candidate);
    }

    let easter = easter_sunday(year);
    observed.push(easter - Duration::days(2)); // Good Friday
    observed.push(easter + Duration::days(1)); // Easter Monday

    observed.push(first_monday(year, 5)); // Early May bank holiday
    observed.push(last_monday(year, 5)); // Spring bank holiday
    observed.push(last_monday(year, 8)); // Summer bank holiday

    observed
}

/// Easter Sunday via the anonymous Gregorian computus.
fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    ymd(year, month as u32, day as u32)
}

fn first_monday(year: i32, month: u32) -> NaiveDate {
    let first = ymd(year, month, 1);
    let offset = (7 - first.weekday().num_days_from_monday()) % 7;
    first + Duration::days(offset as i64)
}

fn last_monday(year: i32, month: u32) -> NaiveDate {
    let last_day = if month == 12 {
        ymd(year + 1, 1, 1) - Duration::days(1)
    } else {
        ymd(year, month + 1, 1) - Duration::days(1)
    };
    last_day - Duration::days(last_day.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(year: i32, month: u32, day: u32) -> bool {
        EnglandWalesCalendar.is_public_holiday(ymd(year, month, day))
    }

    #[test]
    fn test_easter_computus_known_years() {
        assert_eq!(easter_sunday(2024), ymd(2024, 3, 31));
        assert_eq!(easter_sunday(2025), ymd(2025, 4, 20));
        assert_eq!(easter_sunday(2026), ymd(2026, 4, 5));
    }

    #[test]
    fn test_2025_holidays() {
        assert!(holiday(2025, 1, 1)); // New Year's Day (Wednesday)
        assert!(holiday(2025, 4, 18)); // Good Friday
        assert!(holiday(2025, 4, 21)); // Easter Monday
        assert!(holiday(2025, 5, 5)); // Early May
        assert!(holiday(2025, 5, 26)); // Spring
        assert!(holiday(2025, 8, 25)); // Summer
        assert!(holiday(2025, 12, 25));
        assert!(holiday(2025, 12, 26));
    }

    #[test]
    fn test_2024_holidays() {
        assert!(holiday(2024, 1, 1));
        assert!(holiday(2024, 3, 29)); // Good Friday
        assert!(holiday(2024, 4, 1)); // Easter Monday
        assert!(holiday(2024, 5, 6));
        assert!(holiday(2024, 5, 27));
        assert!(holiday(2024, 8, 26));
        assert!(holiday(2024, 12, 25));
        assert!(holiday(2024, 12, 26));
    }

    #[test]
    fn test_new_year_weekend_substitution() {
        // 1 Jan 2022 was a Saturday; observed Monday 3rd
        assert!(!holiday(2022, 1, 1));
        assert!(holiday(2022, 1, 3));
    }

    #[test]
    fn test_christmas_weekend_substitution() {
        // 25/26 Dec 2021 fell Sat/Sun; observed Mon 27 and Tue 28
        assert!(!holiday(2021, 12, 25));
        assert!(!holiday(2021, 12, 26));
        assert!(holiday(2021, 12, 27));
        assert!(holiday(2021, 12, 28));

        // 25 Dec 2022 fell on a Sunday; Boxing Day Monday stands, Christmas
        // observed Tuesday 27th
        assert!(holiday(2022, 12, 26));
        assert!(holiday(2022, 12, 27));
        assert!(!holiday(2022, 12, 25));
    }

    #[test]
    fn test_ordinary_days_are_not_holidays() {
        assert!(!holiday(2025, 3, 12)); // a plain Wednesday
        assert!(!holiday(2025, 7, 14));
        assert!(!holiday(2024, 11, 5));
    }
}
