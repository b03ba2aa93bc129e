use ahash::{HashMap, HashMapExt};

use super::{DecisionPolicy, MissAction};
use crate::cache::HireCache;
use crate::catalog::{Resource, ResourceId};

/// Popularity-gated admission: a miss is hired only if the incoming
/// resource is strictly more popular than the least popular cached entry
/// (or the cache still has room); otherwise the request is outsourced and
/// the cache is left untouched.
///
/// Popularity is a per-resource counter bumped on every request, hit or
/// miss — the same observation as [`super::LeastRequested`]'s counter, but
/// here it gates *admission*, not just eviction. The minimum scan resolves
/// ties to the first minimal entry in insertion order.
#[derive(Debug, Default)]
pub struct Popularity {
  popularity: HashMap<ResourceId, u64>,
}

impl Popularity {
  pub fn new() -> Self {
    Self {
      popularity: HashMap::new(),
    }
  }

  fn score(&self, id: ResourceId) -> u64 {
    self.popularity.get(&id).copied().unwrap_or(0)
  }

  /// Least popular cached entry, first minimal in cache order.
  fn least_popular(&self, cache: &HireCache) -> Option<(ResourceId, u64)> {
    let mut min: Option<(ResourceId, u64)> = None;
    for slot in cache.entries() {
      let score = self.score(slot.resource);
      if min.map_or(true, |(_, m)| score < m) {
        min = Some((slot.resource, score));
      }
    }
    min
  }
}

impl DecisionPolicy for Popularity {
  fn name(&self) -> &'static str {
    "popularity"
  }

  fn on_request(&mut self, resource: &Resource) {
    *self.popularity.entry(resource.id).or_insert(0) += 1;
  }

  fn on_miss(&mut self, resource: &Resource, cache: &HireCache) -> MissAction {
    if !cache.is_full() {
      return MissAction::Hire;
    }
    match self.least_popular(cache) {
      Some((_, min)) if self.score(resource.id) > min => MissAction::Hire,
      _ => MissAction::Outsource,
    }
  }

  fn select_victim(&self, cache: &HireCache) -> Option<ResourceId> {
    self.least_popular(cache).map(|(id, _)| id)
  }
}
