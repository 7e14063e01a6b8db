//! TeamPulse core data models.
//!
//! This crate defines the record types the insights engine computes over:
//! tasks, time logs, users, leads, and projects, plus the temporal
//! normalization boundary that turns loosely-typed date/time fields into
//! one comparable instant representation.

#![warn(missing_docs)]

// Core identities
mod id;

// Temporal normalization
mod time;

// Record entities
mod task;
mod timelog;
mod user;
mod lead;
mod project;

// Re-exports
pub use id::{TaskId, TimeLogId, UserId, LeadId, ProjectId};
pub use time::{TemporalValue, month_key, whole_days_between};
pub use task::Task;
pub use timelog::TimeLog;
pub use user::{User, DEFAULT_CAPACITY_HOURS};
pub use lead::{Lead, UNKNOWN_SOURCE};
pub use project::Project;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
