use std::path::Path;

use chrono::NaiveDate;
use pixels_cleaner::analysis::compare_term;
use pixels_cleaner::frequency::top_words;
use pixels_cleaner::output::{to_csv_bytes, write_output};
use pixels_cleaner::stats::TableSummary;
use pixels_cleaner::{PipelineError, run};

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_pixels.json");
const BAD_DATE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bad_date.json");

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_full_pipeline() {
    let table = run(Path::new(SAMPLE)).expect("Failed to clean export");

    assert_eq!(table.len(), 7);
    assert_eq!(table.first_date(), Some(ymd(2023, 12, 30)));
    assert_eq!(table.last_date(), Some(ymd(2024, 1, 5)));

    for pair in table.rows().windows(2) {
        assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
    }

    let new_year = table.get(ymd(2024, 1, 1)).unwrap();
    assert_eq!(new_year.scores, None);
    assert_eq!(new_year.average_score, None);
    assert_eq!(new_year.notes, None);
    assert_eq!(new_year.monthly_mean_score, Some(3.0));

    let eve = table.get(ymd(2023, 12, 31)).unwrap();
    assert_eq!(eve.average_score, Some(4.0));
    assert_eq!(eve.notes, None);
    assert_eq!(eve.word_count, None);
    assert_eq!(eve.yearly_mean_score, Some(4.0));

    let back_to_work = table.get(ymd(2024, 1, 2)).unwrap();
    assert_eq!(back_to_work.word_count, Some(4));
    assert_eq!(back_to_work.char_count, Some(19));
    assert_eq!((back_to_work.year, back_to_work.month), (2024, 1));

    let unscored = table.get(ymd(2024, 1, 3)).unwrap();
    assert_eq!(unscored.scores, Some(vec![]));
    assert_eq!(unscored.average_score, None);
}

#[test]
fn test_pipeline_is_idempotent() {
    let first = run(Path::new(SAMPLE)).unwrap();
    let second = run(Path::new(SAMPLE)).unwrap();

    assert_eq!(first, second);
    assert_eq!(to_csv_bytes(&first).unwrap(), to_csv_bytes(&second).unwrap());
}

#[test]
fn test_bad_date_aborts_run() {
    let err = run(Path::new(BAD_DATE)).unwrap_err();

    match err {
        PipelineError::DateParse(e) => {
            assert_eq!(e.row, 1);
            assert_eq!(e.value, "13/01/2024");
        }
        other => panic!("expected a date parse error, got {other:?}"),
    }
}

#[test]
fn test_malformed_export_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"[{"date": "2024-01-01", "scores": "five"}]"#).unwrap();

    assert!(matches!(run(&path), Err(PipelineError::Load(_))));
}

#[test]
fn test_summary_and_term_on_sample() {
    let table = run(Path::new(SAMPLE)).unwrap();

    let summary = TableSummary::from_table(&table);
    assert_eq!(summary.rows, 7);
    assert_eq!(summary.source_days, 5);
    assert_eq!(summary.gap_days, 2);
    assert_eq!(summary.scored_days, 4);
    assert_eq!(summary.noted_days, 3);
    assert_eq!(summary.mean_score, Some(3.5));

    let cmp = compare_term(&table, "watch");
    assert_eq!(cmp.with_term.days, 2);
    assert_eq!(cmp.with_term.mean_score, Some(4.0));
    assert_eq!(cmp.without_term.days, 1);
    assert_eq!(cmp.without_term.mean_score, Some(2.0));
}

#[test]
fn test_export_csv_to_disk() {
    let table = run(Path::new(SAMPLE)).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let bytes = to_csv_bytes(&table).unwrap();
    let written = write_output(&dir.path().join("clean.csv"), bytes, false).unwrap();

    let mut reader = csv::Reader::from_path(&written).unwrap();
    assert_eq!(reader.records().count(), 7);
}

#[test]
fn test_word_frequencies_on_sample() {
    let table = run(Path::new(SAMPLE)).unwrap();

    let words: Vec<_> = top_words(&table, 3)
        .into_iter()
        .map(|w| (w.term, w.count))
        .collect();

    assert_eq!(
        words,
        vec![
            ("family".to_string(), 1),
            ("film".to_string(), 1),
            ("game".to_string(), 1),
        ]
    );
}
