//! Project record.

use serde::{Deserialize, Serialize};

use crate::id::ProjectId;

/// A project with its realized financials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,

    /// Project name
    pub name: String,

    /// Revenue realized so far
    pub actual_revenue: f64,

    /// Cost incurred so far
    pub cost: f64,
}

impl Project {
    /// Realized revenue minus cost.
    pub fn profit(&self) -> f64 {
        self.actual_revenue - self.cost
    }
}
