//! Record gateway trait abstraction.

use async_trait::async_trait;
use teampulse_core::{Lead, Project, Task, TaskId, TimeLog, User, UserId};

/// Error type for record gateway operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur while reading record collections.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Filter for task queries.
///
/// Presence filters (`has_due_date`, `has_review_start`) match on the raw
/// field being present, before temporal normalization: a task whose due
/// field holds malformed text still matches `has_due_date = Some(true)`
/// and surfaces with `due_date: None`.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Match tasks whose raw due field is present (or absent).
    pub has_due_date: Option<bool>,
    /// Match tasks whose raw review-start field is present (or absent).
    pub has_review_start: Option<bool>,
    /// Match tasks with (or without) an assignee.
    pub assigned: Option<bool>,
}

/// Filter for time log queries.
#[derive(Debug, Clone, Default)]
pub struct TimeLogFilter {
    /// Match entries booked against one task.
    pub task_id: Option<TaskId>,
    /// Match entries booked by one user.
    pub user_id: Option<UserId>,
}

/// Filter for lead queries.
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    /// Match leads by conversion outcome.
    pub converted: Option<bool>,
}

/// Read-only gateway over the record collections.
///
/// Implementations own persistence entirely; the insights engine only
/// ever reads through this trait and never mutates records. Returned
/// entities are already normalized (see [`crate::records`]).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// List tasks matching the filter.
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>>;

    /// List time log entries matching the filter.
    async fn list_time_logs(&self, filter: &TimeLogFilter) -> Result<Vec<TimeLog>>;

    /// List leads matching the filter.
    async fn list_leads(&self, filter: &LeadFilter) -> Result<Vec<Lead>>;

    /// List all users.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// List all projects.
    async fn list_projects(&self) -> Result<Vec<Project>>;
}
