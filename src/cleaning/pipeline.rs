use std::path::Path;

use tracing::info;

use crate::cleaning::calendar::reconcile;
use crate::cleaning::periods::with_period_means;
use crate::cleaning::scores::with_average_scores;
use crate::cleaning::text::with_text_features;
use crate::cleaning::types::{CleanTable, RawRecord};
use crate::error::{DateParseError, PipelineError};
use crate::parser::load_records;

/// Loads the export at `path` and runs every cleaning stage over it.
///
/// # Errors
///
/// Fails with [`PipelineError::Load`] if the export cannot be read or decoded
/// and with [`PipelineError::DateParse`] if any date is malformed. No partial
/// table is produced in either case.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn run(path: &Path) -> Result<CleanTable, PipelineError> {
    let records = load_records(path)?;
    info!(records = records.len(), "Export loaded");

    let table = clean_records(records)?;
    info!(
        rows = table.len(),
        first_date = ?table.first_date(),
        last_date = ?table.last_date(),
        "Pipeline finished"
    );

    Ok(table)
}

/// Runs the in-memory stages: daily average, calendar, period means, text features.
pub fn clean_records(records: Vec<RawRecord>) -> Result<CleanTable, DateParseError> {
    let scored = with_average_scores(records);
    let days = reconcile(scored)?;
    let periods = with_period_means(days);
    let rows = with_text_features(periods);

    Ok(CleanTable::new(rows))
}
