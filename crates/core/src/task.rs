//! Task record - the unit of tracked work.

use serde::{Deserialize, Serialize};

use crate::id::{ProjectId, TaskId, UserId};
use crate::Time;

/// Status labels that mean a task is finished (compared case-insensitively).
pub const COMPLETED_STATUSES: [&str; 2] = ["done", "closed"];

/// A task as seen by the insights engine: temporal fields already
/// normalized, numeric fields already defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Task title
    pub title: String,

    /// Free-form status label
    pub status: String,

    /// Assigned user, if any
    pub assignee_id: Option<UserId>,

    /// Due instant (absent or unparsable upstream => `None`)
    pub due_date: Option<Time>,

    /// Last-updated instant
    pub updated_at: Option<Time>,

    /// When the task entered review, if it did
    pub review_started_at: Option<Time>,

    /// Whether the task is currently blocked
    pub blocked: bool,

    /// How many times the status label changed
    pub status_change_count: u32,

    /// Estimated effort in hours
    pub estimated_hours: f64,

    /// Owning project, if any
    pub project_id: Option<ProjectId>,
}

impl Task {
    /// Whether the status label means the task is finished.
    pub fn is_completed(&self) -> bool {
        let status = self.status.to_lowercase();
        COMPLETED_STATUSES.iter().any(|s| *s == status)
    }
}
