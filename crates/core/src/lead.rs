//! Sales lead record.

use serde::{Deserialize, Serialize};

use crate::id::LeadId;
use crate::Time;

/// Source label used when a lead carries none.
pub const UNKNOWN_SOURCE: &str = "unknown";

/// A sales lead with its acquisition source and outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier
    pub id: LeadId,

    /// Acquisition source label ([`UNKNOWN_SOURCE`] when unlabeled)
    pub source: String,

    /// When the lead was created
    pub created_at: Option<Time>,

    /// Whether the lead converted to a closed deal
    pub converted: bool,

    /// Priority (1 when the field was absent)
    pub priority: i64,

    /// Estimated deal value (0 when the field was absent)
    pub estimated_value: f64,
}
