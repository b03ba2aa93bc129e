use crate::catalog::{Catalog, SkillId};
use crate::error::BuildError;
use crate::sim::Simulation;
use crate::stream;

/// A builder for [`Simulation`] runs.
///
/// Validates the whole run configuration up front — a rejected build means
/// no request was ever processed. Defaults: capacity 10, stream length
/// 1000, persistence 5, unseeded (non-reproducible) stream.
///
/// ```
/// use crewcache_sim::{Catalog, Resource, SimulationBuilder};
///
/// let catalog = Catalog::new(vec![
///   Resource::new(0, 0, 10.0, 1.0),
///   Resource::new(1, 1, 4.0, 5.0),
/// ]).unwrap();
///
/// let sim = SimulationBuilder::new(catalog)
///   .capacity(1)
///   .stream_length(100)
///   .persistence(5)
///   .seed(42)
///   .build()
///   .unwrap();
/// let runs = sim.compare().unwrap();
/// assert_eq!(runs.len(), 6);
/// ```
#[derive(Debug)]
pub struct SimulationBuilder {
  catalog: Catalog,
  capacity: usize,
  stream_length: usize,
  persistence: u32,
  seed: Option<u64>,
  requests: Option<Vec<SkillId>>,
}

impl SimulationBuilder {
  pub fn new(catalog: Catalog) -> Self {
    Self {
      catalog,
      capacity: 10,
      stream_length: 1000,
      persistence: 5,
      seed: None,
      requests: None,
    }
  }

  /// Cache capacity `C`, shared by every cache-bounded policy.
  pub fn capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  /// Number of requests to generate.
  pub fn stream_length(mut self, length: usize) -> Self {
    self.stream_length = length;
    self
  }

  /// Persistence parameter `p`: each step switches skills with probability
  /// `1/p`, so runs of identical requests have expected length `p`.
  pub fn persistence(mut self, persistence: u32) -> Self {
    self.persistence = persistence;
    self
  }

  /// Seeds the stream generator for a reproducible run.
  pub fn seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }

  /// Supplies an explicit request sequence instead of generating one.
  /// Length, persistence, and seed settings are ignored when set.
  pub fn requests(mut self, requests: Vec<SkillId>) -> Self {
    self.requests = Some(requests);
    self
  }

  /// Validates the configuration and materializes the request stream.
  pub fn build(self) -> Result<Simulation, BuildError> {
    if self.capacity == 0 {
      return Err(BuildError::ZeroCapacity);
    }

    let stream = match self.requests {
      Some(requests) => {
        if requests.is_empty() {
          return Err(BuildError::EmptyRequests);
        }
        requests
      }
      None => {
        if self.stream_length == 0 {
          return Err(BuildError::ZeroLength);
        }
        if self.persistence == 0 {
          return Err(BuildError::ZeroPersistence);
        }
        stream::generate(
          &self.catalog.skills(),
          self.stream_length,
          self.persistence,
          self.seed,
        )
      }
    };

    Ok(Simulation::new(self.catalog, stream, self.capacity))
  }
}
