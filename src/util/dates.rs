//! Calendar-date helpers for booking rules and display formatting.
//!
//! DESIGN
//! ======
//! Bookings work in UTC calendar days, matching the stored ISO form, so the
//! "no past check-ins" floor does not shift with the viewer's timezone.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{NaiveDate, Utc};

/// Today's calendar date in UTC.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// The day after `date`, saturating at the end of the calendar.
#[must_use]
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// Parse the value of an `<input type="date">` (`YYYY-MM-DD`).
///
/// Empty or malformed input parses to `None`, a cleared field.
#[must_use]
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Format a date for an `<input type="date">` value or `min` attribute.
#[must_use]
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Long display form, e.g. `June 1, 2025`.
#[must_use]
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Number of nights between check-in and check-out.
#[must_use]
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}
