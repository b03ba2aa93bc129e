use ahash::{HashMap, HashMapExt};

use super::{DecisionPolicy, MissAction};
use crate::cache::HireCache;
use crate::catalog::{Resource, ResourceId};

/// Hires a resource once outsourcing it has become expensive enough.
///
/// Each resource accumulates the outsourcing spend paid on its behalf.
/// A miss is outsourced while the accumulated spend is at or below the
/// hiring cost; once the accumulator strictly exceeds it, the miss is hired
/// and the accumulator resets to zero. This approximates "hire exactly when
/// pay-per-use would have exceeded a one-time hire", the rent-or-buy break-
/// even rule. Eviction on overflow is FIFO.
#[derive(Debug, Default)]
pub struct CostThreshold {
  spend: HashMap<ResourceId, f64>,
}

impl CostThreshold {
  pub fn new() -> Self {
    Self {
      spend: HashMap::new(),
    }
  }
}

impl DecisionPolicy for CostThreshold {
  fn name(&self) -> &'static str {
    "cost-threshold"
  }

  fn on_miss(&mut self, resource: &Resource, _cache: &HireCache) -> MissAction {
    let spend = self.spend.entry(resource.id).or_insert(0.0);
    if *spend > resource.hiring_cost {
      *spend = 0.0;
      MissAction::Hire
    } else {
      *spend += resource.outsourcing_cost;
      MissAction::Outsource
    }
  }
}
