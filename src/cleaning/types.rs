//! Row types handed from one cleaning stage to the next.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A single entry as it appears in the Pixels export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scores: Vec<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<f64>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A source entry with its daily average attached. The date is still unparsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub date: String,
    pub scores: Vec<f64>,
    pub average_score: Option<f64>,
    pub notes: Option<String>,
}

/// One day of the contiguous calendar.
///
/// Gap days have `scores`, `average_score` and `notes` all set to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub scores: Option<Vec<f64>>,
    pub average_score: Option<f64>,
    pub notes: Option<String>,
}

impl CalendarDay {
    pub fn gap(date: NaiveDate) -> Self {
        Self {
            date,
            scores: None,
            average_score: None,
            notes: None,
        }
    }

    pub fn is_gap(&self) -> bool {
        self.scores.is_none()
    }
}

/// A calendar day labelled with its year and month rollups.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodDay {
    pub day: CalendarDay,
    pub year: i32,
    pub month: u32,
    pub yearly_mean_score: Option<f64>,
    pub monthly_mean_score: Option<f64>,
}

/// A fully cleaned row of the output table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub scores: Option<Vec<f64>>,
    pub average_score: Option<f64>,
    pub notes: Option<String>,
    pub word_count: Option<usize>,
    pub char_count: Option<usize>,
    pub year: i32,
    pub month: u32,
    pub yearly_mean_score: Option<f64>,
    pub monthly_mean_score: Option<f64>,
}

/// The cleaned, gap-filled table, ascending by date with one row per day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CleanTable {
    rows: Vec<DailyRecord>,
}

impl CleanTable {
    pub(crate) fn new(rows: Vec<DailyRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[DailyRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }

    /// Looks up a row by date. Relies on the table being sorted.
    pub fn get(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.rows
            .binary_search_by_key(&date, |r| r.date)
            .ok()
            .map(|i| &self.rows[i])
    }
}
