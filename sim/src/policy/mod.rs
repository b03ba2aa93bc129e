pub mod always_hire;
pub mod always_outsource;
pub mod cost_threshold;
pub mod lru;
pub mod popularity;
pub mod primal_dual;

use core::fmt;

use crate::cache::HireCache;
use crate::catalog::{Resource, ResourceId};

pub use always_hire::AlwaysHire;
pub use always_outsource::AlwaysOutsource;
pub use cost_threshold::CostThreshold;
pub use lru::LeastRequested;
pub use popularity::Popularity;
pub use primal_dual::PrimalDual;

/// What a policy wants done with a request that missed the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissAction {
  /// Pay `hiring_cost` once and cache the resource.
  Hire,
  /// Pay `outsourcing_cost` for this request only; the cache is untouched.
  Outsource,
}

/// An online hire-vs-outsource decision strategy.
///
/// The engine drives the trait once per request: `on_request` first (hit or
/// miss, so frequency-style counters see every request), then `on_miss`
/// when the skill is not cached, then `select_victim` when the resulting
/// hire overflows a full cache.
///
/// Policies keep whatever per-resource scratch they need (counters,
/// accumulated spend, hiring pressure) in their own side tables keyed by
/// [`ResourceId`]. A policy value is used for exactly one run, so a fresh
/// instance is a fully reset instance — state can never leak between runs
/// or between policies.
///
/// Victim selection must be a pure function of the current cache contents
/// and the policy's own state: calling `select_victim` twice without an
/// intervening mutation returns the same victim.
pub trait DecisionPolicy {
  /// Stable human-readable name, used in error reports and run output.
  fn name(&self) -> &'static str;

  /// Observes a request for `resource` before the hit/miss branch.
  fn on_request(&mut self, resource: &Resource) {
    let _ = resource;
  }

  /// Decides how to serve a cache miss.
  fn on_miss(&mut self, resource: &Resource, cache: &HireCache) -> MissAction;

  /// Picks the cached resource to displace when a hire overflows a full
  /// cache. The default is FIFO: the oldest inserted entry.
  fn select_victim(&self, cache: &HireCache) -> Option<ResourceId> {
    cache.oldest().map(|slot| slot.resource)
  }
}

/// The six built-in policies, in canonical comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolicyKind {
  AlwaysOutsource,
  AlwaysHire,
  LeastRequested,
  Popularity,
  CostThreshold,
  PrimalDual,
}

impl PolicyKind {
  pub const ALL: [PolicyKind; 6] = [
    PolicyKind::AlwaysOutsource,
    PolicyKind::AlwaysHire,
    PolicyKind::LeastRequested,
    PolicyKind::Popularity,
    PolicyKind::CostThreshold,
    PolicyKind::PrimalDual,
  ];

  /// Instantiates a fresh, fully reset policy for one run.
  pub fn instantiate(self) -> Box<dyn DecisionPolicy + Send> {
    match self {
      PolicyKind::AlwaysOutsource => Box::new(AlwaysOutsource),
      PolicyKind::AlwaysHire => Box::new(AlwaysHire),
      PolicyKind::LeastRequested => Box::new(LeastRequested::new()),
      PolicyKind::Popularity => Box::new(Popularity::new()),
      PolicyKind::CostThreshold => Box::new(CostThreshold::new()),
      PolicyKind::PrimalDual => Box::new(PrimalDual::new()),
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      PolicyKind::AlwaysOutsource => "always-outsource",
      PolicyKind::AlwaysHire => "always-hire",
      PolicyKind::LeastRequested => "least-requested",
      PolicyKind::Popularity => "popularity",
      PolicyKind::CostThreshold => "cost-threshold",
      PolicyKind::PrimalDual => "primal-dual",
    }
  }
}

impl fmt::Display for PolicyKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
