use chrono::NaiveDate;

use crate::models::WeightLog;

/// Overview of logged weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub start: f64,
    pub current: f64,
    /// `current - start`, rounded to one decimal.
    pub change: f64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub entries: usize,
}

/// Logs ordered by date, oldest first.
fn sorted_logs(logs: &[WeightLog]) -> Vec<&WeightLog> {
    let mut sorted: Vec<&WeightLog> = logs.iter().collect();
    sorted.sort_by_key(|log| log.date);
    sorted
}

/// Summarize a weight log. `None` when nothing has been logged.
pub fn summarize(logs: &[WeightLog]) -> Option<ProgressSummary> {
    let sorted = sorted_logs(logs);
    let first = sorted.first()?;
    let last = sorted.last()?;

    Some(ProgressSummary {
        start: first.weight,
        current: last.weight,
        change: ((last.weight - first.weight) * 10.0).round() / 10.0,
        first_date: first.date,
        last_date: last.date,
        entries: sorted.len(),
    })
}

/// Insert a log, replacing any entry for the same date.
///
/// `logs` must already be sorted by date; it stays sorted.
pub fn record_weight(logs: &mut Vec<WeightLog>, entry: WeightLog) {
    match logs.binary_search_by_key(&entry.date, |log| log.date) {
        Ok(idx) => logs[idx] = entry,
        Err(idx) => logs.insert(idx, entry),
    }
}
