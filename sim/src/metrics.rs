use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-run decision counters, collected alongside the cost trace.
///
/// A run is strictly sequential, so these are plain integers updated in
/// place; there is no concurrent access to guard against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunMetrics {
  /// Requests processed.
  pub requests: u64,
  /// Requests served by an already-hired resource at zero cost.
  pub hits: u64,
  /// Requests that triggered a hire.
  pub hires: u64,
  /// Requests served by outsourcing.
  pub outsourced: u64,
  /// Cached resources displaced to make room for a hire.
  pub evictions: u64,
}

impl RunMetrics {
  /// Cache misses: every request that was not a hit.
  pub fn misses(&self) -> u64 {
    self.hires + self.outsourced
  }

  /// Hit ratio in `[0, 1]`; `0.0` for an empty run.
  pub fn hit_ratio(&self) -> f64 {
    if self.requests == 0 {
      return 0.0;
    }
    self.hits as f64 / self.requests as f64
  }
}

impl fmt::Display for RunMetrics {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "requests: {}, hits: {}, hires: {}, outsourced: {}, evictions: {}",
      self.requests, self.hits, self.hires, self.outsourced, self.evictions
    )
  }
}
