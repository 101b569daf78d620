//! Date normalization and gap filling.
//!
//! Output is ascending by date, one row per day from the earliest to the
//! latest source date inclusive. Later stages rely on that order.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::cleaning::types::{CalendarDay, ScoredRecord};
use crate::error::DateParseError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether `value` is exactly four digits, dash, two digits, dash, two digits.
fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a `YYYY-MM-DD` date. `row` is only used for error reporting.
///
/// chrono alone tolerates unpadded fields, leading spaces and signed years,
/// so the shape is checked first.
pub fn parse_date(row: usize, value: &str) -> Result<NaiveDate, DateParseError> {
    let error = |source: Option<chrono::ParseError>| DateParseError {
        row,
        value: value.to_string(),
        source,
    };

    if !has_date_shape(value) {
        return Err(error(None));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| error(Some(e)))
}

/// Rebuilds the table on a contiguous daily axis.
///
/// Source days keep their scores, average and notes. Days missing from the
/// source are synthesized with every non-date field `None`. When a date
/// appears more than once, the first occurrence wins.
///
/// # Errors
///
/// Returns [`DateParseError`] for the first row whose date does not parse.
pub fn reconcile(records: Vec<ScoredRecord>) -> Result<Vec<CalendarDay>, DateParseError> {
    let mut by_date: BTreeMap<NaiveDate, CalendarDay> = BTreeMap::new();

    for (row, record) in records.into_iter().enumerate() {
        let date = parse_date(row, &record.date)?;

        match by_date.entry(date) {
            Entry::Vacant(slot) => {
                slot.insert(CalendarDay {
                    date,
                    scores: Some(record.scores),
                    average_score: record.average_score,
                    notes: record.notes,
                });
            }
            Entry::Occupied(_) => {
                warn!(row, date = %date, "Duplicate date in export, keeping first entry");
            }
        }
    }

    let (Some(&min_date), Some(&max_date)) = (by_date.keys().next(), by_date.keys().next_back())
    else {
        debug!("No source rows, calendar is empty");
        return Ok(Vec::new());
    };

    let source_days = by_date.len();
    let days: Vec<CalendarDay> = min_date
        .iter_days()
        .take_while(|d| *d <= max_date)
        .map(|d| by_date.remove(&d).unwrap_or_else(|| CalendarDay::gap(d)))
        .collect();

    debug!(
        min_date = %min_date,
        max_date = %max_date,
        rows = days.len(),
        gap_days = days.len() - source_days,
        "Calendar reconciled"
    );

    Ok(days)
}
