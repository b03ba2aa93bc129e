//! Persistence-biased request stream generation.
//!
//! The stream models bursty demand: the first request picks a uniformly
//! random skill, and every subsequent step keeps the current skill except
//! with probability `1/p`, where a fresh uniform draw (which may coincide
//! with the current skill) becomes the new current skill. Run lengths of
//! identical consecutive requests are therefore geometric with expectation
//! `p` — the regime where caching pays off.

use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::catalog::SkillId;

/// Generates a request stream of `length` skills drawn from `skills`.
///
/// A `Some(seed)` makes the stream fully reproducible: two calls with the
/// same `(skills, length, persistence, seed)` return byte-identical
/// sequences on any platform, because `Pcg64` has a stable stream for a
/// given seed. `None` seeds from entropy and is non-reproducible.
///
/// Callers must pass a non-empty skill set and `length`/`persistence` of at
/// least 1; [`crate::SimulationBuilder`] validates all three up front.
pub fn generate(skills: &[SkillId], length: usize, persistence: u32, seed: Option<u64>) -> Vec<SkillId> {
  let mut rng = match seed {
    Some(seed) => Pcg64::seed_from_u64(seed),
    None => Pcg64::from_rng(&mut rand::rng()),
  };

  let switch_probability = 1.0 / f64::from(persistence);
  let mut stream = Vec::with_capacity(length);

  let mut current = skills[rng.random_range(0..skills.len())];
  stream.push(current);

  for _ in 1..length {
    if rng.random_bool(switch_probability) {
      current = skills[rng.random_range(0..skills.len())];
    }
    stream.push(current);
  }

  stream
}
