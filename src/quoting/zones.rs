//! Congestion-zone detection.
//!
//! The congestion charge applies when either end of the trip sits inside a
//! charging zone. Address strings are all we have at quote time, so the
//! default detector is a coarse heuristic (a "London" mention or a central
//! postcode prefix), kept behind a trait so a real geofence can replace it
//! without touching the calculators.

/// Predicate deciding whether an address falls in a congestion-charging zone.
pub trait CongestionZone: Send + Sync {
    fn covers(&self, address: &str) -> bool;
}

/// Central-London heuristic detector.
///
/// Matches a case-insensitive "london" substring, or any address token that
/// looks like a central postcode district. Approximate by design: nearby
/// districts outside the charging boundary will occasionally match.
#[derive(Debug, Clone, Default)]
pub struct CentralLondonZone;

const CENTRAL_PREFIXES: &[&str] = &["EC", "WC", "E1", "N1", "NW1", "SE1", "SW1", "W1"];

impl CongestionZone for CentralLondonZone {
    fn covers(&self, address: &str) -> bool {
        let upper = address.to_ascii_uppercase();
        if upper.contains("LONDON") {
            return true;
        }
        upper
            .split(|c: char| c.is_whitespace() || c == ',')
            .any(|token| CENTRAL_PREFIXES.iter().any(|p| district_matches(token, p)))
    }
}

/// True when `token` reads as a postcode district under `prefix`.
///
/// "EC4Y" matches EC, "E1W" matches E1, but "ECCLES" must not match EC: a
/// letter may only follow the prefix when the prefix itself ends in a digit.
fn district_matches(token: &str, prefix: &str) -> bool {
    if !token.starts_with(prefix) {
        return false;
    }
    match token[prefix.len()..].chars().next() {
        None => true,
        Some(c) if c.is_ascii_digit() => true,
        Some(c) if c.is_ascii_alphabetic() => prefix.ends_with(|p: char| p.is_ascii_digit()),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_london_substring_matches() {
        let zone = CentralLondonZone;
        assert!(zone.covers("12 Baker Street, London"));
        assert!(zone.covers("flat 3, LONDON NW1 6XE"));
    }

    #[test]
    fn test_central_postcode_prefix_matches() {
        let zone = CentralLondonZone;
        assert!(zone.covers("10 Fleet St, EC4Y 1AA"));
        assert!(zone.covers("1 Kingsway WC2B 6AA"));
        assert!(zone.covers("County Hall, SE1 7PB"));
        assert!(zone.covers("Tower Bridge Wharf, E1W 1LD"));
    }

    #[test]
    fn test_outside_zone_does_not_match() {
        let zone = CentralLondonZone;
        assert!(!zone.covers("4 High Street, Manchester M1 1AE"));
        assert!(!zone.covers("22 Castle Road, Leeds LS1 4DY"));
        assert!(!zone.covers("9 Station Approach, Guildford GU1 4UT"));
    }

    #[test]
    fn test_prefix_lookalike_words_do_not_match() {
        let zone = CentralLondonZone;
        assert!(!zone.covers("5 Church Lane, Eccles M30 0AA"));
        assert!(!zone.covers("Echo House, Newcastle NE1 4ST"));
    }
}
