//! Search-term comparison over the cleaned table.
//!
//! Reads the table only. Rows with no note have no text to analyze and fall
//! into neither group.

use serde::Serialize;

use crate::cleaning::types::{CleanTable, DailyRecord};
use crate::stats::mean_present;

/// Day count and mean score for one side of a term comparison.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct TermGroup {
    pub days: usize,
    pub mean_score: Option<f64>,
}

/// Average score on days whose note mentions a term versus days whose note does not.
#[derive(Debug, PartialEq, Serialize)]
pub struct TermComparison {
    pub term: String,
    pub with_term: TermGroup,
    pub without_term: TermGroup,
    /// Mean of the two group means.
    pub baseline: Option<f64>,
}

/// Case-insensitive substring match on the note. `None` for rows without a note.
pub fn contains_term(record: &DailyRecord, term: &str) -> Option<bool> {
    let note = record.notes.as_deref()?;
    if term.is_empty() {
        return Some(false);
    }
    Some(note.to_lowercase().contains(&term.to_lowercase()))
}

pub fn compare_term(table: &CleanTable, term: &str) -> TermComparison {
    let mut with_scores = Vec::new();
    let mut without_scores = Vec::new();

    for row in table.rows() {
        match contains_term(row, term) {
            Some(true) => with_scores.push(row.average_score),
            Some(false) => without_scores.push(row.average_score),
            None => {}
        }
    }

    let with_term = TermGroup {
        days: with_scores.len(),
        mean_score: mean_present(with_scores),
    };
    let without_term = TermGroup {
        days: without_scores.len(),
        mean_score: mean_present(without_scores),
    };
    let baseline = mean_present([with_term.mean_score, without_term.mean_score]);

    TermComparison {
        term: term.to_string(),
        with_term,
        without_term,
        baseline,
    }
}

/// Rows whose note mentions `term`, oldest first, at most `limit`.
pub fn matching_notes<'a>(table: &'a CleanTable, term: &str, limit: usize) -> Vec<&'a DailyRecord> {
    table
        .rows()
        .iter()
        .filter(|r| contains_term(r, term) == Some(true))
        .take(limit)
        .collect()
}
