//! Task timeliness classification.

use serde::Serialize;
use teampulse_core::{Task, Time};

/// Counts of tasks per timeliness class. Always sums to the number of
/// tasks classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStatusOverview {
    /// Completed on or before the due instant, or no due instant at all.
    pub on_time: usize,
    /// Completed after due, completed with unknown completion evidence,
    /// or still open with the due instant ahead.
    pub late: usize,
    /// Still open with the due instant behind `now`.
    pub overdue: usize,
}

/// Classify every task as on-time, late, or overdue.
///
/// A task without a due instant is on time by definition. Completed tasks
/// (status `done`/`closed`, case-insensitive) are judged by their
/// last-updated instant against due; a missing updated instant counts as
/// late. Open tasks are overdue once `now` passes due, late otherwise.
pub fn task_status_overview(tasks: &[Task], now: Time) -> TaskStatusOverview {
    let mut overview = TaskStatusOverview::default();
    for task in tasks {
        let Some(due) = task.due_date else {
            overview.on_time += 1;
            continue;
        };
        if task.is_completed() {
            match task.updated_at {
                Some(updated) if updated <= due => overview.on_time += 1,
                _ => overview.late += 1,
            }
        } else if now > due {
            overview.overdue += 1;
        } else {
            overview.late += 1;
        }
    }
    overview
}
