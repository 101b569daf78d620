use std::collections::HashMap;

use chrono::Datelike;
use tracing::debug;

use crate::cleaning::types::{CalendarDay, PeriodDay};
use crate::stats::mean_present;

/// Labels each day with its year and month and broadcasts the yearly and
/// monthly means of `average_score` back onto every row of the group.
///
/// Days without an average are skipped by the means rather than counted as
/// zero. A group with no averaged days gets `None`.
pub fn with_period_means(days: Vec<CalendarDay>) -> Vec<PeriodDay> {
    let mut yearly: HashMap<i32, Vec<Option<f64>>> = HashMap::new();
    let mut monthly: HashMap<(i32, u32), Vec<Option<f64>>> = HashMap::new();

    for day in &days {
        let (year, month) = (day.date.year(), day.date.month());
        yearly.entry(year).or_default().push(day.average_score);
        monthly.entry((year, month)).or_default().push(day.average_score);
    }

    let yearly_means: HashMap<i32, Option<f64>> = yearly
        .into_iter()
        .map(|(year, scores)| (year, mean_present(scores)))
        .collect();
    let monthly_means: HashMap<(i32, u32), Option<f64>> = monthly
        .into_iter()
        .map(|(key, scores)| (key, mean_present(scores)))
        .collect();

    debug!(
        years = yearly_means.len(),
        months = monthly_means.len(),
        "Period means computed"
    );

    days.into_iter()
        .map(|day| {
            let (year, month) = (day.date.year(), day.date.month());
            PeriodDay {
                yearly_mean_score: yearly_means.get(&year).copied().flatten(),
                monthly_mean_score: monthly_means.get(&(year, month)).copied().flatten(),
                year,
                month,
                day,
            }
        })
        .collect()
}
