//! User record.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// Weekly capacity assumed when a user record carries none.
pub const DEFAULT_CAPACITY_HOURS: f64 = 40.0;

/// A team member with a weekly hour budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Weekly capacity in hours (defaulted to
    /// [`DEFAULT_CAPACITY_HOURS`] when absent or non-positive)
    pub capacity_hours_per_week: f64,
}
