//! Small statistical models: logistic classification and linear trend.
//!
//! # Overview
//!
//! Two models back the sales-pipeline insights:
//!
//! - [`LogisticModel`]: binary classifier fit by batch gradient descent on
//!   the cross-entropy loss, with z-score feature standardization. Used to
//!   score lead conversion probability.
//! - [`TrendLine`]: ordinary least-squares line fit. Used to extrapolate
//!   monthly pipeline revenue.
//!
//! Both are refit from scratch on every invocation; nothing is persisted
//! between calls.

use serde::Serialize;

/// Errors from model fitting.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// No training samples were provided.
    #[error("empty training set")]
    EmptyInput,

    /// Feature rows and labels disagree in length or width.
    #[error("feature/label shape mismatch")]
    ShapeMismatch,

    /// The inputs admit no fit (e.g. zero variance on the x axis).
    #[error("degenerate inputs: {0}")]
    Degenerate(&'static str),

    /// Fitting produced non-finite parameters.
    #[error("fit diverged to non-finite parameters")]
    NonFinite,
}

/// Standard logistic function.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Hyperparameters for logistic fitting.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Gradient-descent step size (on standardized features).
    pub learning_rate: f64,
    /// Number of gradient-descent iterations.
    pub max_iter: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            max_iter: 200,
        }
    }
}

/// A fitted binary logistic classifier.
///
/// Features are standardized to zero mean / unit variance before both
/// fitting and scoring, so the step size is scale-independent.
#[derive(Debug, Clone, Serialize)]
pub struct LogisticModel {
    weights: Vec<f64>,
    bias: f64,
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl LogisticModel {
    /// Fit on feature rows and binary labels.
    pub fn fit(features: &[Vec<f64>], labels: &[bool], config: &FitConfig) -> Result<Self, ModelError> {
        if features.is_empty() {
            return Err(ModelError::EmptyInput);
        }
        if features.len() != labels.len() {
            return Err(ModelError::ShapeMismatch);
        }
        let dims = features[0].len();
        if dims == 0 || features.iter().any(|row| row.len() != dims) {
            return Err(ModelError::ShapeMismatch);
        }
        if features.iter().flatten().any(|v| !v.is_finite()) {
            return Err(ModelError::Degenerate("non-finite feature value"));
        }

        let (means, stds) = column_stats(features, dims);
        let standardized: Vec<Vec<f64>> = features
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, v)| (v - means[j]) / stds[j])
                    .collect()
            })
            .collect();

        let n = standardized.len() as f64;
        let mut weights = vec![0.0; dims];
        let mut bias = 0.0;

        for _ in 0..config.max_iter {
            let mut grad_w = vec![0.0; dims];
            let mut grad_b = 0.0;
            for (row, &label) in standardized.iter().zip(labels) {
                let z = dot(&weights, row) + bias;
                let err = sigmoid(z) - f64::from(u8::from(label));
                for (g, v) in grad_w.iter_mut().zip(row) {
                    *g += err * v;
                }
                grad_b += err;
            }
            for (w, g) in weights.iter_mut().zip(&grad_w) {
                *w -= config.learning_rate * g / n;
            }
            bias -= config.learning_rate * grad_b / n;
        }

        if weights.iter().any(|w| !w.is_finite()) || !bias.is_finite() {
            return Err(ModelError::NonFinite);
        }

        Ok(Self {
            weights,
            bias,
            means,
            stds,
        })
    }

    /// Probability of the positive class for one feature row.
    ///
    /// Always lies in `[0, 1]` by construction of the logistic function.
    pub fn predict_proba(&self, features: &[f64]) -> f64 {
        let z = features
            .iter()
            .zip(self.weights.iter().zip(self.means.iter().zip(&self.stds)))
            .map(|(v, (w, (m, s)))| w * ((v - m) / s))
            .sum::<f64>()
            + self.bias;
        sigmoid(z)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn column_stats(features: &[Vec<f64>], dims: usize) -> (Vec<f64>, Vec<f64>) {
    let n = features.len() as f64;
    let mut means = vec![0.0; dims];
    for row in features {
        for (m, v) in means.iter_mut().zip(row) {
            *m += v;
        }
    }
    for m in &mut means {
        *m /= n;
    }
    let mut stds = vec![0.0; dims];
    for row in features {
        for (j, v) in row.iter().enumerate() {
            stds[j] += (v - means[j]).powi(2);
        }
    }
    for s in &mut stds {
        *s = (*s / n).sqrt();
        // Constant columns standardize to zero, not NaN.
        if *s == 0.0 {
            *s = 1.0;
        }
    }
    (means, stds)
}

/// A least-squares fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendLine {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
}

impl TrendLine {
    /// Fit over `(x, y)` points. Requires at least two points with
    /// non-zero variance on the x axis.
    pub fn fit(points: &[(f64, f64)]) -> Result<Self, ModelError> {
        if points.len() < 2 {
            return Err(ModelError::Degenerate("need at least two points"));
        }
        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;
        let sxx: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
        if sxx == 0.0 {
            return Err(ModelError::Degenerate("zero variance on x axis"));
        }
        let sxy: f64 = points.iter().map(|(x, y)| (x - mean_x) * (y - mean_y)).sum();
        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(ModelError::NonFinite);
        }
        Ok(Self { slope, intercept })
    }

    /// Evaluate the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_bounds() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(20.0) > 0.999);
        assert!(sigmoid(-20.0) < 0.001);
    }

    #[test]
    fn test_logistic_separates_simple_data() {
        // Positive class sits at high feature values.
        let features: Vec<Vec<f64>> = vec![
            vec![1.0, 10.0],
            vec![1.0, 20.0],
            vec![2.0, 30.0],
            vec![8.0, 900.0],
            vec![9.0, 1000.0],
            vec![9.0, 1200.0],
        ];
        let labels = vec![false, false, false, true, true, true];
        let model = LogisticModel::fit(&features, &labels, &FitConfig::default()).unwrap();

        let low = model.predict_proba(&[1.0, 15.0]);
        let high = model.predict_proba(&[9.0, 1100.0]);
        assert!(low < 0.5, "low-feature lead scored {low}");
        assert!(high > 0.5, "high-feature lead scored {high}");
    }

    #[test]
    fn test_logistic_probabilities_in_unit_interval() {
        let features: Vec<Vec<f64>> =
            (0..10).map(|i| vec![f64::from(i), f64::from(i * 100)]).collect();
        let labels: Vec<bool> = (0..10).map(|i| i % 2 == 0).collect();
        let model = LogisticModel::fit(&features, &labels, &FitConfig::default()).unwrap();
        for row in &features {
            let p = model.predict_proba(row);
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_logistic_constant_column_is_tolerated() {
        let features: Vec<Vec<f64>> = vec![vec![1.0, 5.0]; 6];
        let labels = vec![true, false, true, false, true, false];
        let model = LogisticModel::fit(&features, &labels, &FitConfig::default()).unwrap();
        let p = model.predict_proba(&[1.0, 5.0]);
        assert!((p - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_logistic_shape_errors() {
        assert!(matches!(
            LogisticModel::fit(&[], &[], &FitConfig::default()),
            Err(ModelError::EmptyInput)
        ));
        assert!(matches!(
            LogisticModel::fit(&[vec![1.0]], &[true, false], &FitConfig::default()),
            Err(ModelError::ShapeMismatch)
        ));
        assert!(matches!(
            LogisticModel::fit(&[vec![1.0], vec![1.0, 2.0]], &[true, false], &FitConfig::default()),
            Err(ModelError::ShapeMismatch)
        ));
    }

    #[test]
    fn test_logistic_rejects_non_finite_features() {
        let features = vec![vec![f64::NAN, 1.0], vec![1.0, 2.0]];
        let labels = vec![true, false];
        assert!(LogisticModel::fit(&features, &labels, &FitConfig::default()).is_err());
    }

    #[test]
    fn test_trend_line_exact_fit() {
        let points: Vec<(f64, f64)> = (0..5).map(|i| (f64::from(i), 3.0 + 2.0 * f64::from(i))).collect();
        let line = TrendLine::fit(&points).unwrap();
        assert!((line.slope - 2.0).abs() < 1e-9);
        assert!((line.intercept - 3.0).abs() < 1e-9);
        assert!((line.predict(10.0) - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_trend_line_degenerate() {
        assert!(TrendLine::fit(&[(0.0, 1.0)]).is_err());
        assert!(TrendLine::fit(&[(1.0, 1.0), (1.0, 2.0)]).is_err());
    }
}
