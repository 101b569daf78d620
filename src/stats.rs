use chrono::NaiveDate;
use serde::Serialize;

use crate::cleaning::types::CleanTable;

/// Arithmetic mean of `values`, or `None` when there is nothing to average.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean over the present entries of `values`; `None` entries are skipped, not zeroed.
pub fn mean_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Headline numbers for a cleaned table.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct TableSummary {
    pub rows: usize,
    pub source_days: usize,
    pub gap_days: usize,
    pub scored_days: usize,
    pub noted_days: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub mean_score: Option<f64>,
}

impl TableSummary {
    pub fn from_table(table: &CleanTable) -> Self {
        let mut s = TableSummary {
            rows: table.len(),
            first_date: table.first_date(),
            last_date: table.last_date(),
            ..Default::default()
        };

        for row in table.rows() {
            if row.scores.is_some() {
                s.source_days += 1;
            } else {
                s.gap_days += 1;
            }

            if row.average_score.is_some() {
                s.scored_days += 1;
            }

            if row.notes.is_some() {
                s.noted_days += 1;
            }
        }

        s.mean_score = mean_present(table.rows().iter().map(|r| r.average_score));
        s
    }

    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }

    /// Share of the calendar that had to be synthesized.
    pub fn gap_pct(&self) -> f64 {
        Self::pct(self.gap_days, self.rows)
    }
}
