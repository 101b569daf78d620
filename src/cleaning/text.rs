use tracing::debug;

use crate::cleaning::types::{DailyRecord, PeriodDay};

/// Collapses an empty note into `None`.
pub fn normalize_note(note: Option<String>) -> Option<String> {
    note.filter(|n| !n.is_empty())
}

/// Number of whitespace-delimited tokens in `note`.
pub fn word_count(note: &str) -> usize {
    note.split_whitespace().count()
}

/// Number of characters in `note`, as given.
pub fn char_count(note: &str) -> usize {
    note.chars().count()
}

/// Normalizes notes and derives word and character counts for each row.
///
/// Counts are `None` exactly when the normalized note is `None`. Text is
/// counted as-is: no case folding or punctuation stripping.
pub fn with_text_features(days: Vec<PeriodDay>) -> Vec<DailyRecord> {
    let records: Vec<DailyRecord> = days
        .into_iter()
        .map(|p| {
            let notes = normalize_note(p.day.notes);
            DailyRecord {
                word_count: notes.as_deref().map(word_count),
                char_count: notes.as_deref().map(char_count),
                date: p.day.date,
                scores: p.day.scores,
                average_score: p.day.average_score,
                notes,
                year: p.year,
                month: p.month,
                yearly_mean_score: p.yearly_mean_score,
                monthly_mean_score: p.monthly_mean_score,
            }
        })
        .collect();

    debug!(
        rows = records.len(),
        noted = records.iter().filter(|r| r.notes.is_some()).count(),
        "Text features extracted"
    );

    records
}
