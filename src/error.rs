//! Fatal error kinds for a pipeline run.
//!
//! Both abort the run; no partial table is ever returned.

use std::path::PathBuf;
use thiserror::Error;

/// The export could not be read or does not have the expected shape.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read export at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("export is not a list of daily records: {0}")]
    Json(#[from] serde_json::Error),
}

/// A record's `date` did not match `YYYY-MM-DD`.
///
/// `source` is `None` when the value was rejected for its shape before chrono saw it.
#[derive(Debug, Error)]
#[error("row {row}: date {value:?} does not match YYYY-MM-DD")]
pub struct DateParseError {
    pub row: usize,
    pub value: String,
    #[source]
    pub source: Option<chrono::ParseError>,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    DateParse(#[from] DateParseError),
}
