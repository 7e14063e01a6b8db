//! Unique identifiers for TeamPulse records.
//!
//! Record identity is assigned by the external store, so ids are plain
//! integers wrapped in one newtype per record kind.

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Raw integer value.
            pub fn value(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(v: i64) -> Self {
                Self(v)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

record_id!(
    /// Unique identifier for a Task
    TaskId
);

record_id!(
    /// Unique identifier for a TimeLog
    TimeLogId
);

record_id!(
    /// Unique identifier for a User
    UserId
);

record_id!(
    /// Unique identifier for a Lead
    LeadId
);

record_id!(
    /// Unique identifier for a Project
    ProjectId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_value() {
        let id = TaskId(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: LeadId = serde_json::from_str("7").unwrap();
        assert_eq!(id, LeadId(7));
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
