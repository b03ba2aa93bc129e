use super::{DecisionPolicy, MissAction};
use crate::cache::HireCache;
use crate::catalog::Resource;

/// Hires on every miss, displacing the oldest inserted entry when the cache
/// is full. The reference for pure capacity-bound hiring with no admission
/// smartness.
#[derive(Debug, Default)]
pub struct AlwaysHire;

impl DecisionPolicy for AlwaysHire {
  fn name(&self) -> &'static str {
    "always-hire"
  }

  fn on_miss(&mut self, _resource: &Resource, _cache: &HireCache) -> MissAction {
    MissAction::Hire
  }

  // FIFO victim via the default `select_victim`.
}
