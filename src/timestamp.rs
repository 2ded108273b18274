//! The fixed, ordered list of date/time layouts a value may match.
//!
//! Matching is exact: a value is a timestamp only when one of the layouts
//! consumes it entirely. Regex hints reject values with no calendar or clock
//! structure before the layout table is consulted, since the table is by far
//! the most expensive branch of the detector.

use std::sync::LazyLock;

use chrono::format::{Parsed, StrftimeItems};
use regex::Regex;

/// Accepted layouts, tried in order.
///
/// ISO-8601 first (date, then date-times with fractional seconds at 3 or 6
/// digits, in both separator spellings), then RFC 3339 with or without
/// fractional seconds, then the calendar/email/HTTP layouts (ANSIC, Unix
/// date, Ruby date, RFC 1123 and RFC 822 with named and numeric zones,
/// RFC 850), and last the Kitchen clock and the Stamp family.
const LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.3f",
    "%Y-%m-%d %H:%M:%S%.6f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.3f",
    "%Y-%m-%dT%H:%M:%S%.6f",
    "%+",
    "%a %b %e %H:%M:%S %Y",
    "%a %b %e %H:%M:%S %Z %Y",
    "%a %b %d %H:%M:%S %z %Y",
    "%a, %d %b %Y %H:%M:%S %Z",
    "%a, %d %b %Y %H:%M:%S %z",
    "%d %b %y %H:%M %Z",
    "%d %b %y %H:%M %z",
    "%A, %d-%b-%y %H:%M:%S %Z",
    "%I:%M%p",
    "%b %e %H:%M:%S",
    "%b %e %H:%M:%S%.3f",
    "%b %e %H:%M:%S%.6f",
    "%b %e %H:%M:%S%.9f",
];

/// Clock fragment ("15:04") rendered by every time-bearing layout.
static CLOCK_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}:\d{2}").expect("Invalid clock hint pattern"));

/// Leading ISO-8601 calendar date, the one layout shape with no clock.
static ISO_DATE_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}").expect("Invalid date hint pattern"));

/// Check whether `value` matches one of the accepted layouts exactly.
pub(crate) fn is_timestamp(value: &str) -> bool {
    // Every layout renders either a clock fragment or a leading ISO date,
    // so the gate never drops a value the table would accept.
    if !CLOCK_HINT.is_match(value) && !ISO_DATE_HINT.is_match(value) {
        return false;
    }
    LAYOUTS.iter().any(|layout| matches_layout(value, layout))
}

/// Scan `value` against a single strftime layout.
///
/// `chrono::format::parse` enforces per-field ranges and demands the whole
/// input be consumed, but does not resolve the fields to a point in time.
/// Resolution is impossible for the table as a whole: the Stamp family
/// carries no year and Kitchen no date.
fn matches_layout(value: &str, layout: &str) -> bool {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, value, StrftimeItems::new(layout)).is_ok()
}
