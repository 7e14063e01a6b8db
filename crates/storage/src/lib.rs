//! Record gateway abstraction and reference implementation for TeamPulse.
//!
//! This crate provides the trait-based read-only interface the insights
//! engine consumes, the raw wire records with their normalization
//! boundary, and an in-memory snapshot-backed implementation.

#![warn(missing_docs)]

pub mod trait_;
pub mod records;
pub mod memory;

pub use trait_::{
    RecordStore, StorageError, Result, TaskFilter, TimeLogFilter, LeadFilter,
};
pub use records::{RawTask, RawTimeLog, RawUser, RawLead, RawProject};
pub use memory::{MemoryStore, Snapshot};
