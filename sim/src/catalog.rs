use core::fmt;

use ahash::{HashMap, HashMapExt};

use crate::error::BuildError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque identifier of a skill that requests ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkillId(pub u32);

impl fmt::Display for SkillId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "skill#{}", self.0)
  }
}

/// Opaque identifier of a hireable resource (a worker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "resource#{}", self.0)
  }
}

/// A hireable resource offering exactly one skill.
///
/// Hiring pays `hiring_cost` once and serves every subsequent request for
/// the skill free of charge while the resource stays cached; outsourcing
/// pays `outsourcing_cost` for a single request without caching anything.
///
/// Per-policy scratch values (request counters, popularity, accumulated
/// spend, hiring pressure) deliberately do NOT live here; each policy keeps
/// its own side table keyed by [`ResourceId`], so two policies can never
/// observe each other's state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Resource {
  pub id: ResourceId,
  pub skill: SkillId,
  pub hiring_cost: f64,
  pub outsourcing_cost: f64,
}

impl Resource {
  pub fn new(id: u32, skill: u32, hiring_cost: f64, outsourcing_cost: f64) -> Self {
    Self {
      id: ResourceId(id),
      skill: SkillId(skill),
      hiring_cost,
      outsourcing_cost,
    }
  }
}

/// The immutable set of resources a run draws from, indexed by skill.
///
/// The catalog is read-only shared data: every policy run sees the same
/// resources and costs. If several resources offer the same skill, lookup
/// resolves to the first one in catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
  resources: Vec<Resource>,
  by_skill: HashMap<SkillId, usize>,
}

impl Catalog {
  /// Builds a catalog, validating costs up front.
  ///
  /// Returns [`BuildError::EmptyCatalog`] for an empty resource list and
  /// [`BuildError::NegativeCost`] if any resource carries a negative hiring
  /// or outsourcing cost.
  pub fn new(resources: Vec<Resource>) -> Result<Self, BuildError> {
    if resources.is_empty() {
      return Err(BuildError::EmptyCatalog);
    }

    let mut by_skill = HashMap::with_capacity(resources.len());
    for (pos, resource) in resources.iter().enumerate() {
      if resource.hiring_cost < 0.0 || resource.outsourcing_cost < 0.0 {
        return Err(BuildError::NegativeCost { resource: resource.id });
      }
      // First resource per skill wins; later duplicates are never looked up.
      by_skill.entry(resource.skill).or_insert(pos);
    }

    Ok(Self { resources, by_skill })
  }

  /// Looks up the resource serving `skill`.
  ///
  /// `None` signals a stream/catalog inconsistency; callers treat it as a
  /// fatal precondition violation, not a recoverable branch.
  pub fn resource_for(&self, skill: SkillId) -> Option<&Resource> {
    self.by_skill.get(&skill).map(|&pos| &self.resources[pos])
  }

  /// The distinct skills this catalog can serve, in catalog order.
  pub fn skills(&self) -> Vec<SkillId> {
    self
      .resources
      .iter()
      .enumerate()
      .filter(|(pos, r)| self.by_skill[&r.skill] == *pos)
      .map(|(_, r)| r.skill)
      .collect()
  }

  pub fn resources(&self) -> &[Resource] {
    &self.resources
  }

  pub fn len(&self) -> usize {
    self.resources.len()
  }

  pub fn is_empty(&self) -> bool {
    self.resources.is_empty()
  }
}
