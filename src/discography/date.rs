use chrono::NaiveDate;

use crate::types::ReleaseDatePrecision;

/// Sort key for release dates that cannot be parsed. Sorts as the oldest.
pub const SENTINEL_MIN_DATE: NaiveDate = NaiveDate::MIN;

/// Converts a partial release date into a comparable calendar date.
///
/// Year precision maps to the last day of the year and month precision to
/// the 28th of the month. Day precision and unknown precisions are parsed
/// as given.
///
/// Input that does not form a valid, zero-padded `YYYY-MM-DD` date yields
/// [`SENTINEL_MIN_DATE`].
///
/// # Example
///
/// ```
/// let d = normalize_release_date("2020", ReleaseDatePrecision::Year);
/// assert_eq!(d, NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
/// ```
pub fn normalize_release_date(release_date: &str, precision: ReleaseDatePrecision) -> NaiveDate {
    let full = match precision {
        ReleaseDatePrecision::Year => format!("{release_date}-12-31"),
        ReleaseDatePrecision::Month => format!("{release_date}-28"),
        ReleaseDatePrecision::Day | ReleaseDatePrecision::Unknown => release_date.to_string(),
    };

    if !is_iso_date(&full) {
        return SENTINEL_MIN_DATE;
    }
    NaiveDate::parse_from_str(&full, "%Y-%m-%d").unwrap_or(SENTINEL_MIN_DATE)
}

/// Strict `YYYY-MM-DD` shape: no sign, padding or surrounding whitespace.
fn is_iso_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
