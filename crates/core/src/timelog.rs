//! Time log record - hours a user booked against a task.

use serde::{Deserialize, Serialize};

use crate::id::{TaskId, TimeLogId, UserId};
use crate::Time;

/// A single time entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeLog {
    /// Unique identifier
    pub id: TimeLogId,

    /// Task the hours were booked against
    pub task_id: TaskId,

    /// User who booked the hours
    pub user_id: UserId,

    /// Logged hours (0 when the field was absent)
    pub hours: f64,

    /// When the entry was created
    pub created_at: Option<Time>,

    /// Free-text comment, if any
    pub comment: Option<String>,

    /// Whether files were attached to the entry
    pub files_attached: bool,
}

impl TimeLog {
    /// Whether the entry carries any evidence of the work done: a
    /// non-empty comment or an attachment.
    pub fn has_evidence(&self) -> bool {
        self.comment.as_deref().is_some_and(|c| !c.is_empty()) || self.files_attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(comment: Option<&str>, files: bool) -> TimeLog {
        TimeLog {
            id: TimeLogId(1),
            task_id: TaskId(1),
            user_id: UserId(1),
            hours: 1.0,
            created_at: None,
            comment: comment.map(str::to_string),
            files_attached: files,
        }
    }

    #[test]
    fn test_evidence() {
        assert!(!log(None, false).has_evidence());
        assert!(!log(Some(""), false).has_evidence());
        assert!(log(Some("fixed the parser"), false).has_evidence());
        assert!(log(None, true).has_evidence());
    }
}
