use tracing::debug;

use crate::cleaning::types::{RawRecord, ScoredRecord};
use crate::stats::mean;

/// Attaches the daily average of `scores` to every record.
///
/// A day with no scores gets `None`, never zero.
pub fn with_average_scores(records: Vec<RawRecord>) -> Vec<ScoredRecord> {
    let scored: Vec<ScoredRecord> = records
        .into_iter()
        .map(|r| ScoredRecord {
            average_score: mean(&r.scores),
            date: r.date,
            scores: r.scores,
            notes: r.notes,
        })
        .collect();

    debug!(
        rows = scored.len(),
        unscored = scored.iter().filter(|r| r.average_score.is_none()).count(),
        "Daily averages computed"
    );

    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_two_scores() {
        let scored = with_average_scores(vec![raw("2024-01-01", &[3.0, 5.0])]);
        assert_eq!(scored[0].average_score, Some(4.0));
    }

    #[test]
    fn test_empty_scores_average_is_none() {
        let scored = with_average_scores(vec![raw("2024-01-01", &[])]);
        assert_eq!(scored[0].average_score, None);
        assert!(scored[0].scores.is_empty());
    }

    #[test]
    fn test_order_and_fields_preserved() {
        let mut second = raw("2023-12-31", &[1.0, 2.0, 4.0]);
        second.notes = Some("new year's eve".to_string());

        let scored = with_average_scores(vec![raw("2024-01-01", &[5.0]), second]);

        assert_eq!(scored[0].date, "2024-01-01");
        assert_eq!(scored[1].date, "2023-12-31");
        assert_eq!(scored[1].scores, vec![1.0, 2.0, 4.0]);
        assert_eq!(scored[1].notes.as_deref(), Some("new year's eve"));
        assert!((scored[1].average_score.unwrap() - 7.0 / 3.0).abs() < 1e-12);
    }

    fn raw(date: &str, scores: &[f64]) -> RawRecord {
        RawRecord {
            date: date.to_string(),
            scores: scores.to_vec(),
            notes: None,
        }
    }
}
