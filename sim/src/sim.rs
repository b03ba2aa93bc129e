use crate::cache::HireCache;
use crate::catalog::{Catalog, SkillId};
use crate::error::{CapacityFault, SimError};
use crate::metrics::RunMetrics;
use crate::policy::{DecisionPolicy, MissAction, PolicyKind};
use crate::trace::CostTrace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The outcome of running one policy over the configured stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PolicyRun {
  /// Name of the policy that produced this run.
  pub policy: &'static str,
  /// Cumulative cost, `stream length + 1` entries starting at zero.
  pub trace: CostTrace,
  /// Decision counters for the run.
  pub metrics: RunMetrics,
}

/// A fixed (catalog, stream, capacity) triple that policies compete on.
///
/// The catalog and stream are immutable once built, so every policy run
/// observes byte-identical input; per-policy scratch state lives inside the
/// policy values themselves, which are created fresh per run. Runs are
/// therefore mutually independent, and [`Simulation::compare`] fans them
/// out with a plain fork-join.
#[derive(Debug, Clone)]
pub struct Simulation {
  catalog: Catalog,
  stream: Vec<SkillId>,
  capacity: usize,
}

impl Simulation {
  pub(crate) fn new(catalog: Catalog, stream: Vec<SkillId>, capacity: usize) -> Self {
    Self {
      catalog,
      stream,
      capacity,
    }
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  /// The shared request stream every policy consumes.
  pub fn stream(&self) -> &[SkillId] {
    &self.stream
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Runs one built-in policy on a fresh cache and fresh policy state.
  pub fn run(&self, kind: PolicyKind) -> Result<PolicyRun, SimError> {
    let mut policy = kind.instantiate();
    self.run_policy(policy.as_mut())
  }

  /// Runs an arbitrary policy — the extension point for strategies beyond
  /// the built-in six. The policy must be freshly constructed; reusing one
  /// would leak side-table state across runs.
  pub fn run_policy(&self, policy: &mut dyn DecisionPolicy) -> Result<PolicyRun, SimError> {
    let name = policy.name();
    let mut cache = HireCache::new(self.capacity);
    let mut trace = CostTrace::with_capacity(self.stream.len());
    let mut metrics = RunMetrics::default();

    for (index, &skill) in self.stream.iter().enumerate() {
      let resource = self
        .catalog
        .resource_for(skill)
        .ok_or(SimError::CatalogLookup {
          policy: name,
          index,
          skill,
        })?;

      metrics.requests += 1;
      policy.on_request(resource);

      let cost = if cache.contains(skill) {
        metrics.hits += 1;
        0.0
      } else {
        match policy.on_miss(resource, &cache) {
          MissAction::Outsource => {
            metrics.outsourced += 1;
            resource.outsourcing_cost
          }
          MissAction::Hire => {
            if cache.is_full() {
              let victim =
                policy
                  .select_victim(&cache)
                  .ok_or(SimError::CapacityViolation {
                    policy: name,
                    index,
                    fault: CapacityFault::NoVictim,
                  })?;
              if cache.evict(victim).is_none() {
                return Err(SimError::CapacityViolation {
                  policy: name,
                  index,
                  fault: CapacityFault::NoVictim,
                });
              }
              metrics.evictions += 1;
            }
            cache
              .insert(resource)
              .map_err(|fault| SimError::CapacityViolation {
                policy: name,
                index,
                fault,
              })?;
            metrics.hires += 1;
            resource.hiring_cost
          }
        }
      };

      trace.record(cost);
    }

    log::debug!(
      "policy '{}' finished: final cost {:.3}, {}",
      name,
      trace.final_cost(),
      metrics
    );

    Ok(PolicyRun {
      policy: name,
      trace,
      metrics,
    })
  }

  /// Runs all six built-in policies over the identical stream and catalog,
  /// returning their runs in [`PolicyKind::ALL`] order.
  ///
  /// With the `parallel` feature (default) the runs execute as independent
  /// rayon tasks; the runs share no mutable state, so the join only
  /// collects results. The first error, if any, aborts the comparison.
  pub fn compare(&self) -> Result<Vec<PolicyRun>, SimError> {
    #[cfg(feature = "parallel")]
    {
      PolicyKind::ALL.par_iter().map(|&kind| self.run(kind)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
      PolicyKind::ALL.iter().map(|&kind| self.run(kind)).collect()
    }
  }
}
