use super::{DecisionPolicy, MissAction};
use crate::cache::HireCache;
use crate::catalog::Resource;

/// The do-nothing baseline: every request is outsourced, the cache stays
/// empty, and the trace is the cost upper-bound reference for the run.
#[derive(Debug, Default)]
pub struct AlwaysOutsource;

impl DecisionPolicy for AlwaysOutsource {
  fn name(&self) -> &'static str {
    "always-outsource"
  }

  fn on_miss(&mut self, _resource: &Resource, _cache: &HireCache) -> MissAction {
    MissAction::Outsource
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::Resource;

  #[test]
  fn never_hires() {
    let mut policy = AlwaysOutsource;
    let cache = HireCache::new(4);
    let resource = Resource::new(0, 1, 10.0, 1.0);

    for _ in 0..5 {
      assert_eq!(policy.on_miss(&resource, &cache), MissAction::Outsource);
    }
  }
}
