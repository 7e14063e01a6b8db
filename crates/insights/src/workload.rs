//! Member workload utilization.

use std::collections::HashMap;

use serde::Serialize;
use teampulse_core::{whole_days_between, Task, TimeLog, Time, User, UserId};

/// Default look-ahead window in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 14;

/// Utilization above this percentage is overloaded.
pub const OVERLOAD_PCT: f64 = 100.0;

/// Utilization below this percentage is underloaded.
pub const UNDERLOAD_PCT: f64 = 30.0;

/// Utilization status relative to weekly capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    /// Weekly estimate exceeds capacity.
    Overloaded,
    /// Weekly estimate within the normal band.
    Ok,
    /// Weekly estimate below [`UNDERLOAD_PCT`] of capacity.
    Underloaded,
}

/// Projected near-term load for one member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberLoad {
    /// The member.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Weekly capacity in hours.
    pub capacity_hours_per_week: f64,
    /// Estimated effort hours falling inside the look-ahead window.
    pub estimated_work_hours_next_window: f64,
    /// Window estimate normalized to one week.
    pub weekly_estimated_hours: f64,
    /// Hours the member logged in the trailing 7 days (diagnostic only).
    pub recent_logged_hours_7d: f64,
    /// Weekly estimate over capacity, as a percentage.
    pub utilization_pct: f64,
    /// Status derived from the utilization percentage.
    pub status: LoadStatus,
}

/// Compute per-member projected load versus weekly capacity.
///
/// A task counts toward a member's window when it is assigned to them,
/// not completed, and either due within `[0, window_days]` whole days of
/// `now` or carries no due instant at all. The window sum is normalized
/// to a weekly figure by dividing by `max(1, window_days / 7)` weeks.
/// Results are sorted by utilization percentage descending; hours are
/// rounded to 2 decimals and percentages to 1.
pub fn compute_member_loads(
    users: &[User],
    tasks: &[Task],
    logs: &[TimeLog],
    window_days: i64,
    now: Time,
) -> Vec<MemberLoad> {
    // Trailing-7-day logged hours per user. An entry without a parseable
    // creation instant counts as logged now.
    let mut recent_by_user: HashMap<UserId, f64> = HashMap::new();
    for log in logs {
        let created = log.created_at.unwrap_or(now);
        if whole_days_between(now, created) <= 7 {
            *recent_by_user.entry(log.user_id).or_insert(0.0) += log.hours;
        }
    }

    let weeks_in_window = (window_days as f64 / 7.0).max(1.0);

    let mut loads: Vec<MemberLoad> = users
        .iter()
        .map(|user| {
            let window_hours: f64 = tasks
                .iter()
                .filter(|t| t.assignee_id == Some(user.id) && !t.is_completed())
                .filter(|t| match t.due_date {
                    None => true,
                    Some(due) => {
                        let days_out = whole_days_between(due, now);
                        (0..=window_days).contains(&days_out)
                    }
                })
                .map(|t| t.estimated_hours)
                .sum();

            let weekly = window_hours / weeks_in_window;
            let capacity = user.capacity_hours_per_week;
            let utilization = if capacity > 0.0 {
                weekly / capacity * 100.0
            } else {
                0.0
            };
            let status = if utilization > OVERLOAD_PCT {
                LoadStatus::Overloaded
            } else if utilization < UNDERLOAD_PCT {
                LoadStatus::Underloaded
            } else {
                LoadStatus::Ok
            };

            MemberLoad {
                user_id: user.id,
                name: user.name.clone(),
                capacity_hours_per_week: capacity,
                estimated_work_hours_next_window: round2(window_hours),
                weekly_estimated_hours: round2(weekly),
                recent_logged_hours_7d: round2(
                    recent_by_user.get(&user.id).copied().unwrap_or(0.0),
                ),
                utilization_pct: round1(utilization),
                status,
            }
        })
        .collect();

    loads.sort_by(|a, b| b.utilization_pct.total_cmp(&a.utilization_pct));
    loads
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};
    use teampulse_core::{TaskId, TimeLogId};

    fn now() -> Time {
        DateTime::parse_from_rfc3339("2025-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn user(id: i64, capacity: f64) -> User {
        User {
            id: UserId(id),
            name: format!("user {id}"),
            capacity_hours_per_week: capacity,
        }
    }

    fn assigned_task(id: i64, assignee: i64, hours: f64, due: Option<Time>) -> Task {
        Task {
            id: TaskId(id),
            title: String::new(),
            status: "in_progress".to_string(),
            assignee_id: Some(UserId(assignee)),
            due_date: due,
            updated_at: None,
            review_started_at: None,
            blocked: false,
            status_change_count: 0,
            estimated_hours: hours,
            project_id: None,
        }
    }

    #[test]
    fn test_fifty_percent_is_ok() {
        // 40h of estimates across a 14-day window = 20h/week against a
        // 40h capacity.
        let users = vec![user(1, 40.0)];
        let tasks = vec![assigned_task(1, 1, 40.0, Some(now() + Duration::days(5)))];
        let loads = compute_member_loads(&users, &tasks, &[], DEFAULT_WINDOW_DAYS, now());
        assert_eq!(loads[0].weekly_estimated_hours, 20.0);
        assert_eq!(loads[0].utilization_pct, 50.0);
        assert_eq!(loads[0].status, LoadStatus::Ok);
    }

    #[test]
    fn test_overloaded_above_hundred() {
        // 90h over two weeks = 45h/week against 40h capacity = 112.5%.
        let users = vec![user(1, 40.0)];
        let tasks = vec![assigned_task(1, 1, 90.0, Some(now() + Duration::days(3)))];
        let loads = compute_member_loads(&users, &tasks, &[], DEFAULT_WINDOW_DAYS, now());
        assert_eq!(loads[0].utilization_pct, 112.5);
        assert_eq!(loads[0].status, LoadStatus::Overloaded);
    }

    #[test]
    fn test_underloaded_below_thirty() {
        let users = vec![user(1, 40.0)];
        let tasks = vec![assigned_task(1, 1, 10.0, Some(now() + Duration::days(3)))];
        let loads = compute_member_loads(&users, &tasks, &[], DEFAULT_WINDOW_DAYS, now());
        assert_eq!(loads[0].status, LoadStatus::Underloaded);
    }

    #[test]
    fn test_task_due_hours_ago_excluded_from_window() {
        // Twelve hours past due floors to -1 whole days, which falls
        // outside the [0, window] look-ahead band.
        let users = vec![user(1, 40.0)];
        let tasks = vec![assigned_task(1, 1, 40.0, Some(now() - Duration::hours(12)))];
        let loads = compute_member_loads(&users, &tasks, &[], DEFAULT_WINDOW_DAYS, now());
        assert_eq!(loads[0].estimated_work_hours_next_window, 0.0);
        assert_eq!(loads[0].utilization_pct, 0.0);
    }

    #[test]
    fn test_tasks_outside_window_excluded() {
        let users = vec![user(1, 40.0)];
        let tasks = vec![
            assigned_task(1, 1, 40.0, Some(now() + Duration::days(30))),
            assigned_task(2, 1, 40.0, Some(now() - Duration::days(3))),
        ];
        let loads = compute_member_loads(&users, &tasks, &[], DEFAULT_WINDOW_DAYS, now());
        assert_eq!(loads[0].estimated_work_hours_next_window, 0.0);
    }

    #[test]
    fn test_no_due_tasks_always_counted() {
        let users = vec![user(1, 40.0)];
        let mut done = assigned_task(2, 1, 50.0, None);
        done.status = "done".to_string();
        let tasks = vec![assigned_task(1, 1, 14.0, None), done];
        let loads = compute_member_loads(&users, &tasks, &[], DEFAULT_WINDOW_DAYS, now());
        assert_eq!(loads[0].estimated_work_hours_next_window, 14.0);
    }

    #[test]
    fn test_zero_capacity_yields_zero_utilization() {
        let users = vec![user(1, 0.0)];
        let tasks = vec![assigned_task(1, 1, 40.0, None)];
        let loads = compute_member_loads(&users, &tasks, &[], DEFAULT_WINDOW_DAYS, now());
        assert_eq!(loads[0].utilization_pct, 0.0);
        assert_eq!(loads[0].status, LoadStatus::Underloaded);
    }

    #[test]
    fn test_recent_logged_hours_window() {
        let users = vec![user(1, 40.0)];
        let logs = vec![
            TimeLog {
                id: TimeLogId(1),
                task_id: TaskId(1),
                user_id: UserId(1),
                hours: 3.0,
                created_at: Some(now() - Duration::days(2)),
                comment: None,
                files_attached: false,
            },
            TimeLog {
                id: TimeLogId(2),
                task_id: TaskId(1),
                user_id: UserId(1),
                hours: 5.0,
                created_at: Some(now() - Duration::days(30)),
                comment: None,
                files_attached: false,
            },
        ];
        let loads = compute_member_loads(&users, &[], &logs, DEFAULT_WINDOW_DAYS, now());
        assert_eq!(loads[0].recent_logged_hours_7d, 3.0);
    }

    #[test]
    fn test_sorted_by_utilization_desc() {
        let users = vec![user(1, 40.0), user(2, 40.0)];
        let tasks = vec![
            assigned_task(1, 1, 10.0, None),
            assigned_task(2, 2, 80.0, None),
        ];
        let loads = compute_member_loads(&users, &tasks, &[], DEFAULT_WINDOW_DAYS, now());
        assert_eq!(loads[0].user_id, UserId(2));
    }

    #[test]
    fn test_utilization_monotone_in_effort() {
        let users = vec![user(1, 40.0)];
        let mut last = 0.0;
        for hours in [0.0, 10.0, 25.0, 60.0, 200.0] {
            let tasks = vec![assigned_task(1, 1, hours, None)];
            let loads = compute_member_loads(&users, &tasks, &[], DEFAULT_WINDOW_DAYS, now());
            assert!(loads[0].utilization_pct >= last);
            last = loads[0].utilization_pct;
        }
    }
}
