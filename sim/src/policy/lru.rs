use ahash::{HashMap, HashMapExt};

use super::{DecisionPolicy, MissAction};
use crate::cache::HireCache;
use crate::catalog::{Resource, ResourceId};

/// Hires on every miss and evicts the cached resource with the fewest total
/// requests.
///
/// Every request — hit or miss — bumps the per-resource counter, so the
/// ranking reflects lifetime demand, not just recency. On eviction the scan
/// walks the cache in insertion order with a strict `<`, which resolves
/// counter ties to the first (oldest inserted) minimal entry. The tie-break
/// must stay deterministic: equal counters are common on short streams.
#[derive(Debug, Default)]
pub struct LeastRequested {
  requests: HashMap<ResourceId, u64>,
}

impl LeastRequested {
  pub fn new() -> Self {
    Self {
      requests: HashMap::new(),
    }
  }
}

impl DecisionPolicy for LeastRequested {
  fn name(&self) -> &'static str {
    "least-requested"
  }

  fn on_request(&mut self, resource: &Resource) {
    *self.requests.entry(resource.id).or_insert(0) += 1;
  }

  fn on_miss(&mut self, _resource: &Resource, _cache: &HireCache) -> MissAction {
    MissAction::Hire
  }

  fn select_victim(&self, cache: &HireCache) -> Option<ResourceId> {
    let mut victim: Option<(ResourceId, u64)> = None;
    for slot in cache.entries() {
      let count = self.requests.get(&slot.resource).copied().unwrap_or(0);
      if victim.map_or(true, |(_, min)| count < min) {
        victim = Some((slot.resource, count));
      }
    }
    victim.map(|(id, _)| id)
  }
}
