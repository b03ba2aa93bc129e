use core::fmt;

use crate::catalog::{ResourceId, SkillId};

/// Errors that can occur when assembling a simulation or a catalog.
///
/// Every variant is a configuration precondition, checked once before any
/// request is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
  /// The cache capacity was zero. Every cache-bounded policy needs room for
  /// at least one hired resource.
  ZeroCapacity,
  /// The requested stream length was zero.
  ZeroLength,
  /// The persistence parameter was zero; the switch probability `1/p`
  /// requires `p >= 1`.
  ZeroPersistence,
  /// The catalog contains no resources.
  EmptyCatalog,
  /// A resource carries a negative hiring or outsourcing cost.
  NegativeCost { resource: ResourceId },
  /// An explicit request sequence was supplied but was empty.
  EmptyRequests,
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BuildError::ZeroCapacity => write!(f, "cache capacity cannot be zero"),
      BuildError::ZeroLength => write!(f, "request stream length cannot be zero"),
      BuildError::ZeroPersistence => write!(f, "persistence parameter cannot be zero"),
      BuildError::EmptyCatalog => write!(f, "catalog must contain at least one resource"),
      BuildError::NegativeCost { resource } => {
        write!(f, "{} has a negative cost", resource)
      }
      BuildError::EmptyRequests => write!(f, "explicit request sequence cannot be empty"),
    }
  }
}

impl std::error::Error for BuildError {}

/// The specific cache invariant a policy run broke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapacityFault {
  /// An insert would have placed a second entry for the same skill.
  DuplicateSkill(SkillId),
  /// An insert would have grown the cache past its configured capacity.
  OverCapacity { len: usize, capacity: usize },
  /// A full cache needed an eviction but the policy named no victim, or
  /// named one that is not cached.
  NoVictim,
}

impl fmt::Display for CapacityFault {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CapacityFault::DuplicateSkill(skill) => {
        write!(f, "duplicate cache entry for {}", skill)
      }
      CapacityFault::OverCapacity { len, capacity } => {
        write!(f, "cache holds {} entries with capacity {}", len, capacity)
      }
      CapacityFault::NoVictim => write!(f, "no eviction victim selected on a full cache"),
    }
  }
}

/// Fatal errors surfaced while a policy consumes the stream.
///
/// Both variants indicate an upstream inconsistency or an implementation
/// bug; neither is recoverable, and both carry the offending request index
/// and policy name for diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
  /// A requested skill has no matching resource in the catalog.
  CatalogLookup {
    policy: &'static str,
    index: usize,
    skill: SkillId,
  },
  /// The cache invariant was breached by a policy decision.
  CapacityViolation {
    policy: &'static str,
    index: usize,
    fault: CapacityFault,
  },
}

impl fmt::Display for SimError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SimError::CatalogLookup { policy, index, skill } => write!(
        f,
        "policy '{}' found no resource for {} at request {}",
        policy, skill, index
      ),
      SimError::CapacityViolation { policy, index, fault } => write!(
        f,
        "policy '{}' violated a cache invariant at request {}: {}",
        policy, index, fault
      ),
    }
  }
}

impl std::error::Error for SimError {}
