//! Output formatting and persistence for the cleaned table.
//!
//! Supports pretty-printing, JSON export, and CSV export, each optionally gzip-compressed.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::WriterBuilder;
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cleaning::types::{CleanTable, DailyRecord};

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl std::fmt::Debug) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Flat CSV view of a [`DailyRecord`]. Scores are joined with `;`.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    date: NaiveDate,
    scores: Option<String>,
    average_score: Option<f64>,
    notes: Option<&'a str>,
    word_count: Option<usize>,
    char_count: Option<usize>,
    year: i32,
    month: u32,
    yearly_mean_score: Option<f64>,
    monthly_mean_score: Option<f64>,
}

impl<'a> From<&'a DailyRecord> for CsvRow<'a> {
    fn from(r: &'a DailyRecord) -> Self {
        CsvRow {
            date: r.date,
            scores: r.scores.as_ref().map(|s| {
                s.iter()
                    .map(f64::to_string)
                    .collect::<Vec<_>>()
                    .join(";")
            }),
            average_score: r.average_score,
            notes: r.notes.as_deref(),
            word_count: r.word_count,
            char_count: r.char_count,
            year: r.year,
            month: r.month,
            yearly_mean_score: r.yearly_mean_score,
            monthly_mean_score: r.monthly_mean_score,
        }
    }
}

/// Renders the table as CSV with a header row. Null cells are left empty.
pub fn to_csv_bytes(table: &CleanTable) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(Vec::new());

    for row in table.rows() {
        writer.serialize(CsvRow::from(row))?;
    }
    writer.flush()?;

    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}

/// Renders the table as a pretty JSON array. Null cells become `null`.
pub fn to_json_bytes(table: &CleanTable) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(table)?)
}

/// Writes `bytes` to `path`, gzip-compressing them and appending `.gz` when asked.
///
/// Returns the path actually written.
pub fn write_output(path: &Path, bytes: Vec<u8>, gzip: bool) -> Result<PathBuf> {
    let (body, target) = if gzip {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&bytes)?;
        let compressed = encoder.finish()?;

        let mut name = path.as_os_str().to_owned();
        name.push(".gz");
        (compressed, PathBuf::from(name))
    } else {
        (bytes, path.to_path_buf())
    };

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    std::fs::write(&target, &body).with_context(|| format!("failed to write {}", target.display()))?;
    debug!(path = %target.display(), bytes = body.len(), gzip, "Table written");

    Ok(target)
}
