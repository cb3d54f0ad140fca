//! Success rate and trend metrics

use chrono::NaiveDate;

use crate::models::Execution;

/// Percentage of completed executions within `[start, end]` inclusive.
///
/// Returns exactly `0.0` when no execution falls in the range (never NaN).
/// Duplicate same-date executions each count individually; there is no
/// deduplication.
pub fn success_percentage(executions: &[Execution], start: NaiveDate, end: NaiveDate) -> f64 {
    let in_range: Vec<&Execution> = executions
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .collect();

    if in_range.is_empty() {
        return 0.0;
    }

    let completed = in_range.iter().filter(|e| e.completed).count();
    (completed as f64 / in_range.len() as f64) * 100.0
}

/// Fraction of completed executions over the full history, in `[0.0, 1.0]`.
///
/// An empty history yields `0.0`. The source system divided without a zero
/// check; the guard here is a deliberate policy choice.
pub fn completion_rate(executions: &[Execution]) -> f64 {
    if executions.is_empty() {
        return 0.0;
    }

    let completed = executions.iter().filter(|e| e.completed).count();
    completed as f64 / executions.len() as f64
}

/// Whether the second half of the history has strictly more completions than
/// the first half.
///
/// The list is split at index `len / 2` (for odd sizes the first half is one
/// element smaller) and taken in the order the caller supplies it, typically
/// date-ascending. No sorting, no date awareness. Ties and empty lists
/// return false.
pub fn is_improving_trend(executions: &[Execution]) -> bool {
    let mid = executions.len() / 2;
    let (first, second) = executions.split_at(mid);

    let first_completed = first.iter().filter(|e| e.completed).count();
    let second_completed = second.iter().filter(|e| e.completed).count();

    second_completed > first_completed
}
