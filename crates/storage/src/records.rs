//! Raw wire records and the normalization boundary.
//!
//! Records arrive from a store as flat field mappings whose temporal
//! fields may be native instants or ISO-8601 text, and whose optional
//! numeric fields may be missing. The `into_*` conversions here are the
//! single place both are resolved: temporal fields normalize to one
//! instant type (malformed text becomes absent, with a warning) and
//! numeric fields take their documented defaults. Everything past this
//! boundary operates on [`teampulse_core`] entities only.

use serde::{Deserialize, Serialize};
use tracing::warn;

use teampulse_core::{
    Lead, LeadId, Project, ProjectId, Task, TaskId, TemporalValue, Time, TimeLog,
    TimeLogId, User, UserId, DEFAULT_CAPACITY_HOURS, UNKNOWN_SOURCE,
};

fn normalize(kind: &str, id: i64, field: &str, value: Option<&TemporalValue>) -> Option<Time> {
    let value = value?;
    let normalized = value.normalize();
    if normalized.is_none() {
        warn!(kind, id, field, "suppressing malformed temporal field");
    }
    normalized
}

/// A task as it arrives from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTask {
    /// Unique identifier
    pub id: TaskId,
    /// Task title
    #[serde(default)]
    pub title: String,
    /// Free-form status label
    #[serde(default)]
    pub status: Option<String>,
    /// Assigned user
    #[serde(default)]
    pub assignee_id: Option<UserId>,
    /// Due instant, native or text
    #[serde(default)]
    pub due_date: Option<TemporalValue>,
    /// Last-updated instant, native or text
    #[serde(default)]
    pub updated_at: Option<TemporalValue>,
    /// Review-start instant, native or text
    #[serde(default)]
    pub review_started_at: Option<TemporalValue>,
    /// Blocked flag
    #[serde(default)]
    pub blocked: bool,
    /// Status-change counter
    #[serde(default)]
    pub status_change_count: Option<u32>,
    /// Estimated effort hours
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    /// Owning project
    #[serde(default)]
    pub project_id: Option<ProjectId>,
}

impl RawTask {
    /// Normalize into a core [`Task`].
    pub fn into_task(self) -> Task {
        let id = self.id;
        Task {
            id,
            title: self.title,
            status: self.status.unwrap_or_default(),
            assignee_id: self.assignee_id,
            due_date: normalize("task", id.value(), "due_date", self.due_date.as_ref()),
            updated_at: normalize("task", id.value(), "updated_at", self.updated_at.as_ref()),
            review_started_at: normalize(
                "task",
                id.value(),
                "review_started_at",
                self.review_started_at.as_ref(),
            ),
            blocked: self.blocked,
            status_change_count: self.status_change_count.unwrap_or(0),
            estimated_hours: self.estimated_hours.unwrap_or(0.0),
            project_id: self.project_id,
        }
    }
}

/// A time log entry as it arrives from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTimeLog {
    /// Unique identifier
    pub id: TimeLogId,
    /// Task the hours were booked against
    pub task_id: TaskId,
    /// User who booked the hours
    pub user_id: UserId,
    /// Logged hours
    #[serde(default)]
    pub hours: Option<f64>,
    /// Creation instant, native or text
    #[serde(default)]
    pub created_at: Option<TemporalValue>,
    /// Free-text comment
    #[serde(default)]
    pub comment: Option<String>,
    /// Attachment flag
    #[serde(default)]
    pub files_attached: bool,
}

impl RawTimeLog {
    /// Normalize into a core [`TimeLog`].
    pub fn into_time_log(self) -> TimeLog {
        let id = self.id;
        TimeLog {
            id,
            task_id: self.task_id,
            user_id: self.user_id,
            hours: self.hours.unwrap_or(0.0),
            created_at: normalize("timelog", id.value(), "created_at", self.created_at.as_ref()),
            comment: self.comment,
            files_attached: self.files_attached,
        }
    }
}

/// A user as it arrives from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUser {
    /// Unique identifier
    pub id: UserId,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Weekly capacity hours
    #[serde(default)]
    pub capacity_hours_per_week: Option<f64>,
}

impl RawUser {
    /// Normalize into a core [`User`], defaulting absent or non-positive
    /// capacity to [`DEFAULT_CAPACITY_HOURS`].
    pub fn into_user(self) -> User {
        let capacity = match self.capacity_hours_per_week {
            Some(c) if c > 0.0 => c,
            _ => DEFAULT_CAPACITY_HOURS,
        };
        User {
            id: self.id,
            name: self.name,
            capacity_hours_per_week: capacity,
        }
    }
}

/// A lead as it arrives from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLead {
    /// Unique identifier
    pub id: LeadId,
    /// Acquisition source label
    #[serde(default)]
    pub source: Option<String>,
    /// Creation instant, native or text
    #[serde(default)]
    pub created_at: Option<TemporalValue>,
    /// Conversion outcome
    #[serde(default)]
    pub converted: bool,
    /// Priority
    #[serde(default)]
    pub priority: Option<i64>,
    /// Estimated deal value
    #[serde(default)]
    pub estimated_value: Option<f64>,
}

impl RawLead {
    /// Normalize into a core [`Lead`]. An absent or empty source label
    /// becomes [`UNKNOWN_SOURCE`].
    pub fn into_lead(self) -> Lead {
        let id = self.id;
        let source = match self.source {
            Some(s) if !s.is_empty() => s,
            _ => UNKNOWN_SOURCE.to_string(),
        };
        Lead {
            id,
            source,
            created_at: normalize("lead", id.value(), "created_at", self.created_at.as_ref()),
            converted: self.converted,
            priority: self.priority.unwrap_or(1),
            estimated_value: self.estimated_value.unwrap_or(0.0),
        }
    }
}

/// A project as it arrives from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProject {
    /// Unique identifier
    pub id: ProjectId,
    /// Project name
    #[serde(default)]
    pub name: String,
    /// Realized revenue
    #[serde(default)]
    pub actual_revenue: Option<f64>,
    /// Incurred cost
    #[serde(default)]
    pub cost: Option<f64>,
}

impl RawProject {
    /// Normalize into a core [`Project`].
    pub fn into_project(self) -> Project {
        Project {
            id: self.id,
            name: self.name,
            actual_revenue: self.actual_revenue.unwrap_or(0.0),
            cost: self.cost.unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_task_defaults_and_malformed_due() {
        let raw: RawTask = serde_json::from_str(
            r#"{"id": 3, "title": "ship it", "due_date": "soon(tm)"}"#,
        )
        .unwrap();
        assert!(raw.due_date.is_some());

        let task = raw.into_task();
        assert_eq!(task.id, TaskId(3));
        assert_eq!(task.due_date, None);
        assert_eq!(task.status, "");
        assert_eq!(task.estimated_hours, 0.0);
        assert_eq!(task.status_change_count, 0);
        assert!(!task.blocked);
    }

    #[test]
    fn test_raw_user_capacity_defaults() {
        let absent: RawUser = serde_json::from_str(r#"{"id": 1, "name": "ana"}"#).unwrap();
        assert_eq!(absent.into_user().capacity_hours_per_week, 40.0);

        let zero: RawUser =
            serde_json::from_str(r#"{"id": 2, "name": "bo", "capacity_hours_per_week": 0}"#)
                .unwrap();
        assert_eq!(zero.into_user().capacity_hours_per_week, 40.0);

        let set: RawUser =
            serde_json::from_str(r#"{"id": 3, "name": "cy", "capacity_hours_per_week": 32}"#)
                .unwrap();
        assert_eq!(set.into_user().capacity_hours_per_week, 32.0);
    }

    #[test]
    fn test_raw_lead_defaults() {
        let raw: RawLead = serde_json::from_str(r#"{"id": 9, "source": ""}"#).unwrap();
        let lead = raw.into_lead();
        assert_eq!(lead.source, "unknown");
        assert_eq!(lead.priority, 1);
        assert_eq!(lead.estimated_value, 0.0);
        assert!(!lead.converted);
    }

    #[test]
    fn test_raw_timelog_hours_default() {
        let raw: RawTimeLog =
            serde_json::from_str(r#"{"id": 1, "task_id": 2, "user_id": 3}"#).unwrap();
        let log = raw.into_time_log();
        assert_eq!(log.hours, 0.0);
        assert_eq!(log.created_at, None);
    }
}
