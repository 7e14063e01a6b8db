//! TeamPulse insights engine.
//!
//! Pure, read-only computations that turn record collections into
//! operational insights: task timeliness, review stalls, work-pattern
//! anomalies, member workload, lead-source ranking, lead conversion
//! probabilities, pipeline forecasts, and project profitability.
//!
//! Every component is a deterministic function over entity slices plus an
//! explicit `now` instant; [`InsightsEngine`] owns the gateway reads and
//! composes the combined report. Nothing here caches or mutates: each
//! invocation reads a fresh snapshot and computes from scratch.

#![warn(missing_docs)]

pub mod error;
pub mod model;
pub mod timeliness;
pub mod review;
pub mod anomalies;
pub mod workload;
pub mod leads;
pub mod forecast;
pub mod profit;
pub mod engine;

pub use error::{InsightError, Result};
pub use timeliness::{task_status_overview, TaskStatusOverview};
pub use review::{find_stuck_in_review, StuckTask, DEFAULT_STALL_DAYS};
pub use anomalies::{no_work_until_last_day, unusual_behaviors, UnusualBehaviors};
pub use workload::{compute_member_loads, LoadStatus, MemberLoad, DEFAULT_WINDOW_DAYS};
pub use leads::{
    lead_close_probabilities, rank_lead_sources, LeadCloseProbability, SourceStats,
    MIN_MODEL_POPULATION,
};
pub use forecast::{forecast_pipeline, DEFAULT_HORIZON_MONTHS};
pub use profit::{detect_unprofitable_projects, UnprofitableProject};
pub use engine::{InsightsEngine, InsightsReport, ReportConfig};
