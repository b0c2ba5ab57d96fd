//! Best-effort date normalization for modifier values.
//!
//! Recognizes a handful of common date shapes and rewrites them to a full
//! human-readable date ("Monday, July 4, 2016"). Anything else passes
//! through unchanged. This helper is not part of the store's correctness
//! surface; a value it doesn't recognize is simply stored as typed.

use chrono::NaiveDate;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
];

/// Rewrite a recognizable date to its full form; pass everything else
/// through unchanged.
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.format("%A, %B %-d, %Y").to_string();
        }
    }
    raw.to_string()
}
