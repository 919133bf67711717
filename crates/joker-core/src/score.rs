//! Blending of metrics into a single 0–100 score.
//!
//! The first argument of every function here is the model string, i.e. the
//! known command. The metrics are not symmetric, so callers must not swap it
//! with the user's input.

use crate::error::{Error, Result};
use crate::metrics::{MetricFn, letter_histogram_score, length_score, positional_letter_score};

/// Metrics used by [`default_score`], equally weighted.
pub const DEFAULT_METRICS: &[MetricFn] =
    &[length_score, positional_letter_score, letter_histogram_score];

/// Scoring strategy handed to the selector.
pub trait Scorer {
    /// Score `input` against the model string `original`, in `0.0..=100.0`.
    fn score(&self, original: &str, input: &str) -> Result<f64>;
}

impl<F> Scorer for F
where
    F: Fn(&str, &str) -> Result<f64>,
{
    fn score(&self, original: &str, input: &str) -> Result<f64> {
        self(original, input)
    }
}

/// Averages an ordered set of metrics.
#[derive(Debug, Clone, Copy)]
pub struct CompositeScorer<'m> {
    metrics: &'m [MetricFn],
}

/// The strategy used when the caller does not pick one.
pub const DEFAULT_SCORER: CompositeScorer<'static> = CompositeScorer {
    metrics: DEFAULT_METRICS,
};

impl<'m> CompositeScorer<'m> {
    pub fn new(metrics: &'m [MetricFn]) -> Result<Self> {
        if metrics.is_empty() {
            return Err(Error::no_metrics());
        }
        Ok(Self { metrics })
    }

    pub fn metrics(&self) -> &'m [MetricFn] {
        self.metrics
    }
}

impl Scorer for CompositeScorer<'_> {
    fn score(&self, original: &str, input: &str) -> Result<f64> {
        composite_score(original, input, self.metrics)
    }
}

/// Mean of every metric's output, scaled to `0.0..=100.0`.
pub fn composite_score(original: &str, input: &str, metrics: &[MetricFn]) -> Result<f64> {
    if metrics.is_empty() {
        return Err(Error::no_metrics());
    }
    let mut total = 0.0;
    for metric in metrics {
        total += metric(original, input)?;
    }
    Ok(total / metrics.len() as f64 * 100.0)
}

/// [`composite_score`] over [`DEFAULT_METRICS`].
pub fn default_score(original: &str, input: &str) -> Result<f64> {
    composite_score(original, input, DEFAULT_METRICS)
}
