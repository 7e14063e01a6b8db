//! Pipeline revenue forecasting.

use std::collections::BTreeMap;

use teampulse_core::{month_key, Lead};
use tracing::debug;

use crate::model::{ModelError, TrendLine};

/// Default forecast horizon in months.
pub const DEFAULT_HORIZON_MONTHS: usize = 3;

/// Project future converted-lead revenue per calendar month.
///
/// Converted leads are bucketed by the `"YYYY-MM"` key of their creation
/// instant (leads without a parseable instant are skipped). With no
/// history every forecast month is 0; with a single historical month the
/// flat total is carried forward; otherwise a least-squares trend over
/// the ordinal month indices is extrapolated `months_ahead` months past
/// the last observed index, flooring each value at 0.
///
/// Output is keyed `month_1 ..= month_N`.
pub fn forecast_pipeline(
    converted: &[Lead],
    months_ahead: usize,
) -> Result<BTreeMap<String, f64>, ModelError> {
    let mut monthly: BTreeMap<String, f64> = BTreeMap::new();
    for lead in converted {
        let Some(created) = lead.created_at else {
            continue;
        };
        *monthly.entry(month_key(created)).or_insert(0.0) += lead.estimated_value;
    }

    if monthly.len() < 2 {
        let base: f64 = monthly.values().sum();
        return Ok(flat_forecast(base, months_ahead));
    }

    // BTreeMap iteration is already chronological for "YYYY-MM" keys.
    let points: Vec<(f64, f64)> = monthly
        .values()
        .enumerate()
        .map(|(i, &total)| (i as f64, total))
        .collect();
    let line = TrendLine::fit(&points)?;
    debug!(
        history_months = points.len(),
        slope = line.slope,
        "fit pipeline trend"
    );

    let last = (points.len() - 1) as f64;
    Ok((1..=months_ahead)
        .map(|i| (format!("month_{i}"), line.predict(last + i as f64).max(0.0)))
        .collect())
}

fn flat_forecast(value: f64, months_ahead: usize) -> BTreeMap<String, f64> {
    (1..=months_ahead)
        .map(|i| (format!("month_{i}"), value))
        .collect()
}
