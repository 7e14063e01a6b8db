//! The insights aggregator.
//!
//! [`InsightsEngine`] is the external boundary of the core: one call
//! reads the record collections through the gateway, runs every
//! component against that snapshot, and returns the combined report. It
//! adds no computation of its own and holds no state between calls.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use teampulse_core::{TaskId, Time};
use teampulse_storage::{LeadFilter, RecordStore, TaskFilter, TimeLogFilter};

use crate::anomalies::{no_work_until_last_day, unusual_behaviors, UnusualBehaviors};
use crate::error::Result;
use crate::forecast::{forecast_pipeline, DEFAULT_HORIZON_MONTHS};
use crate::leads::{
    lead_close_probabilities, rank_lead_sources, LeadCloseProbability, SourceStats,
};
use crate::profit::{detect_unprofitable_projects, UnprofitableProject};
use crate::review::{find_stuck_in_review, StuckTask, DEFAULT_STALL_DAYS};
use crate::timeliness::{task_status_overview, TaskStatusOverview};
use crate::workload::{compute_member_loads, MemberLoad, DEFAULT_WINDOW_DAYS};

/// Tunable thresholds for one report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Review-stall threshold in whole days.
    pub stall_days: i64,
    /// Workload look-ahead window in days.
    pub window_days: i64,
    /// Forecast horizon in months.
    pub horizon_months: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stall_days: DEFAULT_STALL_DAYS,
            window_days: DEFAULT_WINDOW_DAYS,
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

/// The combined insights mapping, shaped as plain nested primitives for
/// any downstream serialization layer.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsReport {
    /// Task timeliness counts.
    pub task_status_overview: TaskStatusOverview,
    /// Tasks stalled in review.
    pub tasks_stuck_in_review: Vec<StuckTask>,
    /// Tasks with no recorded effort until the final day.
    pub tasks_no_work_until_last_day: Vec<TaskId>,
    /// Churn / evidence-free-log / last-moment-block anomalies.
    pub unusual_behaviors: UnusualBehaviors,
    /// Per-member projected load.
    pub member_loads: Vec<MemberLoad>,
    /// Lead sources ranked by conversions.
    pub lead_source_rank: Vec<SourceStats>,
    /// Per-lead closure probabilities.
    pub lead_close_probs: Vec<LeadCloseProbability>,
    /// Projected monthly pipeline revenue.
    pub pipeline_forecast: BTreeMap<String, f64>,
    /// Projects running at a loss.
    pub unprofitable_projects: Vec<UnprofitableProject>,
}

/// Composes every insight component against a single read of the record
/// collections.
#[derive(Clone)]
pub struct InsightsEngine {
    store: Arc<dyn RecordStore>,
    config: ReportConfig,
}

impl InsightsEngine {
    /// Create an engine with default thresholds.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_config(store, ReportConfig::default())
    }

    /// Create an engine with explicit thresholds.
    pub fn with_config(store: Arc<dyn RecordStore>, config: ReportConfig) -> Self {
        Self { store, config }
    }

    /// Compute the full report against the current instant.
    pub async fn report(&self) -> Result<InsightsReport> {
        self.report_at(Utc::now()).await
    }

    /// Compute the full report against an explicit `now` instant.
    ///
    /// Performs one bounded sequence of gateway reads, then pure
    /// in-memory computation. A failed read or model fit fails the whole
    /// call; there is no partial result.
    pub async fn report_at(&self, now: Time) -> Result<InsightsReport> {
        let all_tasks = self.store.list_tasks(&TaskFilter::default()).await?;
        let due_tasks = self
            .store
            .list_tasks(&TaskFilter {
                has_due_date: Some(true),
                ..Default::default()
            })
            .await?;
        let review_tasks = self
            .store
            .list_tasks(&TaskFilter {
                has_review_start: Some(true),
                ..Default::default()
            })
            .await?;
        let assigned_tasks = self
            .store
            .list_tasks(&TaskFilter {
                assigned: Some(true),
                ..Default::default()
            })
            .await?;
        let logs = self.store.list_time_logs(&TimeLogFilter::default()).await?;
        let users = self.store.list_users().await?;
        let leads = self.store.list_leads(&LeadFilter::default()).await?;
        let converted_leads = self
            .store
            .list_leads(&LeadFilter {
                converted: Some(true),
            })
            .await?;
        let projects = self.store.list_projects().await?;

        debug!(
            tasks = all_tasks.len(),
            timelogs = logs.len(),
            users = users.len(),
            leads = leads.len(),
            projects = projects.len(),
            "computing insights report"
        );

        Ok(InsightsReport {
            task_status_overview: task_status_overview(&all_tasks, now),
            tasks_stuck_in_review: find_stuck_in_review(&review_tasks, self.config.stall_days, now),
            tasks_no_work_until_last_day: no_work_until_last_day(&due_tasks, &logs),
            unusual_behaviors: unusual_behaviors(&all_tasks, &logs, now),
            member_loads: compute_member_loads(
                &users,
                &assigned_tasks,
                &logs,
                self.config.window_days,
                now,
            ),
            lead_source_rank: rank_lead_sources(&leads),
            lead_close_probs: lead_close_probabilities(&leads)?,
            pipeline_forecast: forecast_pipeline(&converted_leads, self.config.horizon_months)?,
            unprofitable_projects: detect_unprofitable_projects(&projects),
        })
    }
}
