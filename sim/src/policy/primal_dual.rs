use ahash::{HashMap, HashMapExt};

use super::{DecisionPolicy, MissAction};
use crate::cache::HireCache;
use crate::catalog::{Resource, ResourceId};

/// Fractional primal-dual policy for the online rent-or-buy problem.
///
/// Each resource carries a continuous hiring pressure `h`, a relaxation of
/// "fraction hired". A miss with `h >= 1` is hired and resets `h` to zero;
/// otherwise the request is outsourced and `h` takes the multiplicative-
/// weights step
///
/// ```text
/// h <- h * (1 + 1/hiring_cost) + 1/(C * hiring_cost)
/// ```
///
/// where `C` is the cache capacity. The exact shape of the update matters:
/// `hiring_cost` in both denominators and `C` scaling only the additive
/// term are what the competitive-ratio analysis of the fractional algorithm
/// relies on. `h` only ever grows while outsourcing; the reset on hire is
/// its sole decrease. Eviction on overflow is FIFO.
#[derive(Debug, Default)]
pub struct PrimalDual {
  pressure: HashMap<ResourceId, f64>,
}

impl PrimalDual {
  pub fn new() -> Self {
    Self {
      pressure: HashMap::new(),
    }
  }

  /// Current hiring pressure for `id`; zero when never outsourced.
  pub fn pressure(&self, id: ResourceId) -> f64 {
    self.pressure.get(&id).copied().unwrap_or(0.0)
  }
}

impl DecisionPolicy for PrimalDual {
  fn name(&self) -> &'static str {
    "primal-dual"
  }

  fn on_miss(&mut self, resource: &Resource, cache: &HireCache) -> MissAction {
    let h = self.pressure.entry(resource.id).or_insert(0.0);
    if *h >= 1.0 {
      *h = 0.0;
      MissAction::Hire
    } else {
      let hiring_cost = resource.hiring_cost;
      let capacity = cache.capacity() as f64;
      *h = *h * (1.0 + 1.0 / hiring_cost) + 1.0 / (capacity * hiring_cost);
      MissAction::Outsource
    }
  }
}
