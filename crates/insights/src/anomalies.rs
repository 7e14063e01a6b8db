//! Work-pattern anomaly heuristics.
//!
//! Three independent, day-granular heuristics over tasks and time logs.
//! They share no state; a task may trip more than one of them.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use teampulse_core::{whole_days_between, Task, TaskId, TimeLog, Time};

/// Status-change count at and above which a task counts as churning.
pub const HIGH_CHURN_THRESHOLD: u32 = 5;

/// Day distance (inclusive, either direction) within which a blocked
/// task's due instant counts as "last moment".
pub const LAST_MOMENT_DAYS: i64 = 1;

/// Tasks whose first recorded effort lands within one day of the due
/// instant, or that have no recorded effort at all.
///
/// Callers pass the tasks that carry a due field; one whose due text
/// failed to normalize is always flagged, as is one with no log entries
/// (entries without a parseable creation instant do not count as
/// evidence of earlier work).
pub fn no_work_until_last_day(tasks: &[Task], logs: &[TimeLog]) -> Vec<TaskId> {
    let mut earliest_by_task: HashMap<TaskId, Time> = HashMap::new();
    for log in logs {
        let Some(created) = log.created_at else {
            continue;
        };
        earliest_by_task
            .entry(log.task_id)
            .and_modify(|t| {
                if created < *t {
                    *t = created;
                }
            })
            .or_insert(created);
    }

    tasks
        .iter()
        .filter(|task| match (task.due_date, earliest_by_task.get(&task.id)) {
            (None, _) | (_, None) => true,
            (Some(due), Some(&earliest)) => whole_days_between(due, earliest) <= 1,
        })
        .map(|task| task.id)
        .collect()
}

/// The combined anomaly report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnusualBehaviors {
    /// Tasks with at least [`HIGH_CHURN_THRESHOLD`] status changes.
    pub high_status_changes: Vec<TaskId>,
    /// Tasks with at least one time entry carrying neither a comment nor
    /// an attachment (deduplicated).
    pub logs_no_comment_no_files: Vec<TaskId>,
    /// Blocked tasks whose due instant is absent or within
    /// [`LAST_MOMENT_DAYS`] of `now`.
    pub blocked_last_moment: Vec<TaskId>,
}

/// Run the churn, evidence-free-log, and last-moment-block heuristics.
pub fn unusual_behaviors(tasks: &[Task], logs: &[TimeLog], now: Time) -> UnusualBehaviors {
    let high_status_changes = tasks
        .iter()
        .filter(|t| t.status_change_count >= HIGH_CHURN_THRESHOLD)
        .map(|t| t.id)
        .collect();

    let evidence_free: BTreeSet<TaskId> = logs
        .iter()
        .filter(|log| !log.has_evidence())
        .map(|log| log.task_id)
        .collect();

    let blocked_last_moment = tasks
        .iter()
        .filter(|t| t.blocked)
        .filter(|t| match t.due_date {
            None => true,
            Some(due) => whole_days_between(due, now).abs() <= LAST_MOMENT_DAYS,
        })
        .map(|t| t.id)
        .collect();

    UnusualBehaviors {
        high_status_changes,
        logs_no_comment_no_files: evidence_free.into_iter().collect(),
        blocked_last_moment,
    }
}
