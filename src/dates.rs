//! Date parsing for the heterogeneous formats found in input files
//!
//! Input files come from spreadsheets exported by different teams, so birth
//! dates and valuation dates arrive in several formats. Parsing tries a fixed
//! list of formats in order and takes the first hit; the ordering doubles as
//! the tie-break for ambiguous strings ("01/02/2024" is 1 February, because
//! day/month/year is tried before month/day/year).

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// No recognized date format matched the input string.
///
/// Callers use this to decide a cell is not a date; it is not fatal on its
/// own (a bad birth date drops one employee row, a bad valuation date aborts
/// the run — that policy lives with the caller, not here).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to parse date: {0}")]
pub struct DateParseError(pub String);

/// Parse a date string, trying each supported format in order.
///
/// Supported formats, in tie-break order:
/// 1. `2024-12-31` (ISO)
/// 2. `2024-12-31 13:45:00` (ISO date-time; time part discarded)
/// 3. `31/12/2024` (day/month/year)
/// 4. `12/31/2024` (month/day/year)
/// 5. `31-12-2024` (day-month-year)
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    let value = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime.date());
    }
    for format in ["%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }

    Err(DateParseError(value.to_string()))
}
