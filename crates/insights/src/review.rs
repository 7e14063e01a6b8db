//! Review-stall detection.

use serde::Serialize;
use teampulse_core::{whole_days_between, Task, TaskId, Time};

/// Default stall threshold in whole days.
pub const DEFAULT_STALL_DAYS: i64 = 3;

/// A task whose review phase has outlived the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StuckTask {
    /// The stalled task.
    pub task_id: TaskId,
    /// Whole days since the review started.
    pub days_in_review: i64,
}

/// Find tasks stuck in review for strictly more than `threshold_days`
/// whole days. Tasks without a (parseable) review-start instant are
/// skipped.
pub fn find_stuck_in_review(tasks: &[Task], threshold_days: i64, now: Time) -> Vec<StuckTask> {
    tasks
        .iter()
        .filter_map(|task| {
            let started = task.review_started_at?;
            let days = whole_days_between(now, started);
            (days > threshold_days).then_some(StuckTask {
                task_id: task.id,
                days_in_review: days,
            })
        })
        .collect()
}
