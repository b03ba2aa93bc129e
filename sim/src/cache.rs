use ahash::{HashSet, HashSetExt};

use crate::catalog::{Resource, ResourceId, SkillId};
use crate::error::CapacityFault;

/// One cached (hired) resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSlot {
  pub resource: ResourceId,
  pub skill: SkillId,
}

/// The bounded pool of currently hired resources.
///
/// Entries are kept in insertion order (oldest first), which is all a FIFO
/// eviction rule needs; LRU and popularity policies rank entries by their
/// own side-table state instead. The cache itself never chooses victims —
/// it only enforces the structural invariants: at most `capacity` entries,
/// no two entries for the same skill.
#[derive(Debug, Clone)]
pub struct HireCache {
  capacity: usize,
  entries: Vec<CacheSlot>,
  skills: HashSet<SkillId>,
}

impl HireCache {
  /// Creates an empty cache. `capacity` must be at least 1; the builder
  /// rejects zero before a cache is ever constructed.
  pub fn new(capacity: usize) -> Self {
    Self {
      capacity,
      entries: Vec::with_capacity(capacity),
      skills: HashSet::with_capacity(capacity),
    }
  }

  pub fn contains(&self, skill: SkillId) -> bool {
    self.skills.contains(&skill)
  }

  pub fn is_full(&self) -> bool {
    self.entries.len() >= self.capacity
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Cached entries, oldest insertion first.
  pub fn entries(&self) -> &[CacheSlot] {
    &self.entries
  }

  /// The FIFO eviction candidate: the oldest inserted entry.
  pub fn oldest(&self) -> Option<&CacheSlot> {
    self.entries.first()
  }

  /// Appends a newly hired resource.
  ///
  /// Fails if the skill is already cached or the cache is full; both are
  /// invariant breaches on the caller's side (the engine evicts before
  /// inserting into a full cache).
  pub fn insert(&mut self, resource: &Resource) -> Result<(), CapacityFault> {
    if self.skills.contains(&resource.skill) {
      return Err(CapacityFault::DuplicateSkill(resource.skill));
    }
    if self.entries.len() >= self.capacity {
      return Err(CapacityFault::OverCapacity {
        len: self.entries.len() + 1,
        capacity: self.capacity,
      });
    }

    self.skills.insert(resource.skill);
    self.entries.push(CacheSlot {
      resource: resource.id,
      skill: resource.skill,
    });
    Ok(())
  }

  /// Removes and returns the entry for `victim`, or `None` if it is not
  /// cached.
  pub fn evict(&mut self, victim: ResourceId) -> Option<CacheSlot> {
    let pos = self.entries.iter().position(|slot| slot.resource == victim)?;
    let slot = self.entries.remove(pos);
    self.skills.remove(&slot.skill);
    Some(slot)
  }
}
