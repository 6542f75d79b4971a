//! Era-annotated date interpretation.
//!
//! Source dates arrive as `"<YEAR> BC"` / `"<YEAR> AD"` strings. They map to
//! absolute instants at January 1, 00:00:00 UTC of the proleptic-Gregorian
//! year, so ordering across the BC/AD boundary falls out of plain instant
//! comparison.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::warn;

use crate::error::{TimelineError, TimelineResult};

const SECONDS_PER_YEAR: f64 = 365.0 * 86_400.0;

/// Strictly parses an era date string.
///
/// The format is `"<YEAR> <ERA>"` after trimming: a base-10 integer year, one
/// space, and a case-sensitive `BC` or `AD` token. BC years map to negative
/// proleptic-Gregorian years.
pub fn parse_era_date(input: &str) -> TimelineResult<DateTime<Utc>> {
    let trimmed = input.trim();
    let Some((year_text, era_text)) = trimmed.split_once(' ') else {
        return Err(unparseable(trimmed, "expected `<YEAR> <ERA>`"));
    };
    let year: i32 = year_text
        .parse()
        .map_err(|_| unparseable(trimmed, "year is not an integer"))?;
    let astronomical_year = match era_text {
        // `-i32::MIN` has no i32 representation; treat it as out of range.
        "BC" => year
            .checked_neg()
            .ok_or_else(|| unparseable(trimmed, "year is outside the supported calendar range"))?,
        "AD" => year,
        _ => return Err(unparseable(trimmed, "era must be `BC` or `AD`")),
    };
    year_start(astronomical_year)
        .ok_or_else(|| unparseable(trimmed, "year is outside the supported calendar range"))
}

/// Soft-fail interpretation used for record data.
///
/// Absent or malformed input maps to [`sentinel_instant`] with a warning, so
/// one bad row degrades instead of failing the dataset. Never panics, never
/// errors.
#[must_use]
pub fn interpret_date(raw: Option<&str>) -> DateTime<Utc> {
    let Some(text) = raw else {
        return sentinel_instant();
    };
    match parse_era_date(text) {
        Ok(instant) => instant,
        Err(error) => {
            warn!(input = text, error = %error, "uninterpretable era date, using sentinel");
            sentinel_instant()
        }
    }
}

/// Instant substituted for uninterpretable dates: January 1 of year 0, UTC.
#[must_use]
pub fn sentinel_instant() -> DateTime<Utc> {
    // Year 0 is always representable; the fallback never fires.
    year_start(0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Window length in 365-day years, the unit the significance thresholds use.
#[must_use]
pub fn span_in_years(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_seconds() as f64 / SECONDS_PER_YEAR
}

/// The 24-hour step used to de-degenerate dynasty ranges.
#[must_use]
pub fn one_day() -> Duration {
    Duration::days(1)
}

fn year_start(year: i32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn unparseable(input: &str, reason: &'static str) -> TimelineError {
    TimelineError::UnparseableDate {
        input: input.to_owned(),
        reason,
    }
}
