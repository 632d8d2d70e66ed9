//! Date parsing and validation for user-entered dates.

use chrono::{Local, NaiveDate};

/// The format used for due dates, transaction dates and report bounds, e.g. `15-03-2024`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// The format used for creation timestamps, e.g. `15-03-2024 09:30:00`.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Returns `true` if `text` parses exactly as a calendar date in `format`.
///
/// No leniency: trailing characters, different separators and impossible dates (such as
/// `29-02-2023`) all return `false`.
pub fn is_valid_with_format(text: &str, format: &str) -> bool {
    NaiveDate::parse_from_str(text, format).is_ok()
}

/// Returns `true` if `text` is a valid [`DATE_FORMAT`] date.
pub fn is_valid(text: &str) -> bool {
    is_valid_with_format(text, DATE_FORMAT)
}

/// Parses a [`DATE_FORMAT`] date.
pub fn parse(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// The current local time formatted with [`TIMESTAMP_FORMAT`].
pub(crate) fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
