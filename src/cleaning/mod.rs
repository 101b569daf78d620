//! Cleaning pipeline for Pixels exports.
//!
//! Stages run strictly in order, each taking the whole table and returning a
//! new one: daily averages, calendar reconciliation, period means, then text
//! features. [`pipeline::run`] drives them from a file path.

pub mod calendar;
pub mod periods;
pub mod pipeline;
pub mod scores;
pub mod text;
pub mod types;
