//! Lead-source ranking and conversion prediction.

use serde::Serialize;
use teampulse_core::{Lead, LeadId};
use tracing::debug;

use crate::model::{FitConfig, LogisticModel, ModelError};

/// Aggregated outcomes for one acquisition source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceStats {
    /// The source label.
    pub source: String,
    /// Number of converted leads from this source.
    pub conversions: usize,
    /// Number of leads from this source.
    pub count: usize,
    /// Summed estimated value across the source's leads.
    pub total_value: f64,
}

/// Group leads by source and rank groups by conversion count descending.
/// Ties keep first-encounter order of the sources.
pub fn rank_lead_sources(leads: &[Lead]) -> Vec<SourceStats> {
    let mut stats: Vec<SourceStats> = Vec::new();
    for lead in leads {
        let idx = match stats.iter().position(|s| s.source == lead.source) {
            Some(idx) => idx,
            None => {
                stats.push(SourceStats {
                    source: lead.source.clone(),
                    conversions: 0,
                    count: 0,
                    total_value: 0.0,
                });
                stats.len() - 1
            }
        };
        let entry = &mut stats[idx];
        entry.count += 1;
        if lead.converted {
            entry.conversions += 1;
        }
        entry.total_value += lead.estimated_value;
    }
    stats.sort_by(|a, b| b.conversions.cmp(&a.conversions));
    stats
}

/// Below this population size the predictor uses the closed-form
/// heuristic instead of fitting a model.
pub const MIN_MODEL_POPULATION: usize = 5;

/// Heuristic probability cap for small populations.
const HEURISTIC_CAP: f64 = 0.9;

/// Estimated closure probability for one lead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeadCloseProbability {
    /// The lead.
    pub lead_id: LeadId,
    /// Probability of the lead closing, in `[0, 1]`.
    pub prob_close: f64,
}

/// Score every lead's closure probability.
///
/// With fewer than [`MIN_MODEL_POPULATION`] leads the score is the
/// bounded heuristic `min(0.9, 0.1 * priority + 0.0001 * value)`. At or
/// above it, a logistic classifier is fit over `[priority, value]`
/// against the conversion outcome of the full population and scores that
/// same population. The model is refit on every call; a failed fit is
/// returned as an error, not papered over.
pub fn lead_close_probabilities(leads: &[Lead]) -> Result<Vec<LeadCloseProbability>, ModelError> {
    if leads.len() < MIN_MODEL_POPULATION {
        return Ok(leads
            .iter()
            .map(|lead| LeadCloseProbability {
                lead_id: lead.id,
                prob_close: heuristic_score(lead),
            })
            .collect());
    }

    let features: Vec<Vec<f64>> = leads
        .iter()
        .map(|l| vec![l.priority as f64, l.estimated_value])
        .collect();
    let labels: Vec<bool> = leads.iter().map(|l| l.converted).collect();

    let model = LogisticModel::fit(&features, &labels, &FitConfig::default())?;
    debug!(leads = leads.len(), "fit lead conversion model");

    Ok(leads
        .iter()
        .zip(&features)
        .map(|(lead, row)| LeadCloseProbability {
            lead_id: lead.id,
            prob_close: model.predict_proba(row),
        })
        .collect())
}

fn heuristic_score(lead: &Lead) -> f64 {
    (0.1 * lead.priority as f64 + 0.0001 * lead.estimated_value).min(HEURISTIC_CAP)
}
