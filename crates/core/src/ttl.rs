//! Token TTL expressions.
//!
//! Lifetimes are configured as compact duration expressions such as `"15m"`
//! or `"7d"` (units: seconds, minutes, hours, days). Anything that does not
//! match falls back to 15 minutes rather than failing startup, so a
//! misconfigured TTL degrades to a short-lived token instead of an outage.

use std::sync::OnceLock;

use chrono::Duration;
use regex::Regex;

/// Fallback applied when a TTL expression cannot be parsed.
const DEFAULT_TTL_MINS: i64 = 15;

fn ttl_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)([smhd])$").expect("TTL regex is valid"))
}

/// Parse a TTL expression into a [`Duration`].
///
/// Recognized forms: `"30s"`, `"15m"`, `"12h"`, `"7d"`. Unrecognized units,
/// malformed input, or values that overflow fall back to 15 minutes.
pub fn parse_ttl(expr: &str) -> Duration {
    let fallback = Duration::minutes(DEFAULT_TTL_MINS);

    let Some(caps) = ttl_regex().captures(expr.trim()) else {
        return fallback;
    };

    let Ok(value) = caps[1].parse::<i64>() else {
        return fallback;
    };

    match &caps[2] {
        "s" => Duration::try_seconds(value),
        "m" => Duration::try_minutes(value),
        "h" => Duration::try_hours(value),
        "d" => Duration::try_days(value),
        _ => None,
    }
    .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_unit() {
        assert_eq!(parse_ttl("30s"), Duration::seconds(30));
        assert_eq!(parse_ttl("15m"), Duration::minutes(15));
        assert_eq!(parse_ttl("12h"), Duration::hours(12));
        assert_eq!(parse_ttl("7d"), Duration::days(7));
    }

    #[test]
    fn falls_back_to_fifteen_minutes() {
        for bad in ["", "7w", "m15", "15 m", "abc", "-5m"] {
            assert_eq!(parse_ttl(bad), Duration::minutes(15), "input: {bad:?}");
        }
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_ttl(" 7d "), Duration::days(7));
    }

    #[test]
    fn overflow_falls_back() {
        // i64::MAX days overflows chrono's Duration range.
        assert_eq!(
            parse_ttl("9223372036854775807d"),
            Duration::minutes(15)
        );
    }
}
