pub mod analysis;
pub mod cleaning;
pub mod config;
pub mod error;
pub mod frequency;
pub mod output;
pub mod parser;
pub mod stats;

pub use cleaning::pipeline::run;
pub use cleaning::types::{CleanTable, DailyRecord};
pub use error::{DateParseError, LoadError, PipelineError};
