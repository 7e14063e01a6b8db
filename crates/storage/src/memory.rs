//! In-memory snapshot-backed record store.
//!
//! Holds the raw record collections of one snapshot and serves filtered,
//! normalized reads over them. Used by tests and the demo CLI; production
//! deployments put a real store behind [`RecordStore`] instead.

use async_trait::async_trait;

use serde::{Deserialize, Serialize};
use teampulse_core::{Lead, Project, Task, TimeLog, User};

use crate::records::{RawLead, RawProject, RawTask, RawTimeLog, RawUser};
use crate::trait_::{LeadFilter, RecordStore, Result, TaskFilter, TimeLogFilter};

/// One snapshot of all record collections, as raw wire records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Task records
    #[serde(default)]
    pub tasks: Vec<RawTask>,
    /// Time log records
    #[serde(default)]
    pub timelogs: Vec<RawTimeLog>,
    /// User records
    #[serde(default)]
    pub users: Vec<RawUser>,
    /// Lead records
    #[serde(default)]
    pub leads: Vec<RawLead>,
    /// Project records
    #[serde(default)]
    pub projects: Vec<RawProject>,
}

/// Read-only in-memory store over a [`Snapshot`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Snapshot,
}

impl MemoryStore {
    /// Create a store over a snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Parse a JSON snapshot document.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Self::new(snapshot))
    }

    fn matches_task(raw: &RawTask, filter: &TaskFilter) -> bool {
        if let Some(want) = filter.has_due_date {
            if raw.due_date.is_some() != want {
                return false;
            }
        }
        if let Some(want) = filter.has_review_start {
            if raw.review_started_at.is_some() != want {
                return false;
            }
        }
        if let Some(want) = filter.assigned {
            if raw.assignee_id.is_some() != want {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        Ok(self
            .snapshot
            .tasks
            .iter()
            .filter(|raw| Self::matches_task(raw, filter))
            .cloned()
            .map(RawTask::into_task)
            .collect())
    }

    async fn list_time_logs(&self, filter: &TimeLogFilter) -> Result<Vec<TimeLog>> {
        Ok(self
            .snapshot
            .timelogs
            .iter()
            .filter(|raw| {
                filter.task_id.map_or(true, |id| raw.task_id == id)
                    && filter.user_id.map_or(true, |id| raw.user_id == id)
            })
            .cloned()
            .map(RawTimeLog::into_time_log)
            .collect())
    }

    async fn list_leads(&self, filter: &LeadFilter) -> Result<Vec<Lead>> {
        Ok(self
            .snapshot
            .leads
            .iter()
            .filter(|raw| filter.converted.map_or(true, |want| raw.converted == want))
            .cloned()
            .map(RawLead::into_lead)
            .collect())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self
            .snapshot
            .users
            .iter()
            .cloned()
            .map(RawUser::into_user)
            .collect())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self
            .snapshot
            .projects
            .iter()
            .cloned()
            .map(RawProject::into_project)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teampulse_core::TaskId;

    fn store() -> MemoryStore {
        MemoryStore::from_json(
            r#"{
                "tasks": [
                    {"id": 1, "title": "a", "due_date": "2025-03-01T00:00:00"},
                    {"id": 2, "title": "b"},
                    {"id": 3, "title": "c", "due_date": "garbled", "assignee_id": 5}
                ],
                "timelogs": [
                    {"id": 1, "task_id": 1, "user_id": 5, "hours": 2.5},
                    {"id": 2, "task_id": 2, "user_id": 6}
                ],
                "users": [{"id": 5, "name": "ana"}],
                "leads": [
                    {"id": 1, "source": "ads", "converted": true},
                    {"id": 2, "source": "ads"}
                ],
                "projects": [{"id": 1, "name": "p", "actual_revenue": 10.0, "cost": 4.0}]
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_due_date_filter_uses_raw_presence() {
        let store = store();
        let with_due = store
            .list_tasks(&TaskFilter {
                has_due_date: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        // Task 3 has a malformed due field: it matches the presence
        // filter but normalizes to an absent instant.
        let ids: Vec<TaskId> = with_due.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(1), TaskId(3)]);
        assert!(with_due[0].due_date.is_some());
        assert!(with_due[1].due_date.is_none());
    }

    #[tokio::test]
    async fn test_timelog_filters() {
        let store = store();
        let by_task = store
            .list_time_logs(&TimeLogFilter {
                task_id: Some(TaskId(1)),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_task.len(), 1);
        assert_eq!(by_task[0].hours, 2.5);
    }

    #[tokio::test]
    async fn test_lead_converted_filter() {
        let store = store();
        let converted = store
            .list_leads(&LeadFilter {
                converted: Some(true),
            })
            .await
            .unwrap();
        assert_eq!(converted.len(), 1);
    }

    #[tokio::test]
    async fn test_assigned_filter() {
        let store = store();
        let assigned = store
            .list_tasks(&TaskFilter {
                assigned: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].id, TaskId(3));
    }
}
