#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cumulative cost of one policy run, the run's sole observable output.
///
/// `values()[0]` is always `0.0` and every later element is the previous
/// one plus the cost of that request, so the trace has `|stream| + 1`
/// entries and is non-decreasing. Two runs are comparable request-for-
/// request exactly when they consumed the identical stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CostTrace {
  values: Vec<f64>,
}

impl CostTrace {
  pub(crate) fn with_capacity(requests: usize) -> Self {
    let mut values = Vec::with_capacity(requests + 1);
    values.push(0.0);
    Self { values }
  }

  /// Appends the cost of one request.
  pub(crate) fn record(&mut self, cost: f64) {
    let last = *self.values.last().unwrap_or(&0.0);
    self.values.push(last + cost);
  }

  /// The full cumulative sequence, starting at `0.0`.
  pub fn values(&self) -> &[f64] {
    &self.values
  }

  /// Total cost after the whole stream.
  pub fn final_cost(&self) -> f64 {
    *self.values.last().unwrap_or(&0.0)
  }

  /// Number of requests accounted for (one less than `values().len()`).
  pub fn requests(&self) -> usize {
    self.values.len() - 1
  }

  /// Per-request cost deltas, in stream order.
  pub fn deltas(&self) -> impl Iterator<Item = f64> + '_ {
    self.values.windows(2).map(|w| w[1] - w[0])
  }
}
