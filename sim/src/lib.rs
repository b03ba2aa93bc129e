//! A simulator for online rent-or-buy caching policies.
//!
//! Given a stream of skill requests, each request is served by an already
//! hired (cached) resource for free, by hiring a new resource at a fixed
//! cost into a bounded cache, or by outsourcing the single request at a
//! per-use cost. Six decision policies compete over the identical stream
//! and catalog, each producing a cumulative cost trace comparable
//! request-for-request.
//!
//! # Features
//! - **Reproducible workloads**: persistence-biased request streams from a
//!   seeded PCG generator, byte-identical for equal seeds.
//! - **Pluggable policies**: always-outsource, always-hire,
//!   least-requested, popularity-gated, cost-threshold, and a fractional
//!   primal-dual competitive algorithm, all behind one [`DecisionPolicy`]
//!   trait.
//! - **Independent runs**: per-policy state lives in policy-private side
//!   tables, so the comparison fans out as a fork-join (`parallel`
//!   feature, on by default).
//! - **Exportable results**: optional `serde` feature for handing traces
//!   and metrics to external plotting/reporting tools.

// Public modules that form the API
pub mod builder;
pub mod cache;
pub mod catalog;
pub mod error;
pub mod metrics;
pub mod policy;
pub mod stream;
pub mod trace;

mod sim;

// Re-export the primary user-facing types for convenience
pub use builder::SimulationBuilder;
pub use cache::{CacheSlot, HireCache};
pub use catalog::{Catalog, Resource, ResourceId, SkillId};
pub use error::{BuildError, CapacityFault, SimError};
pub use metrics::RunMetrics;
pub use policy::{DecisionPolicy, MissAction, PolicyKind};
pub use sim::{PolicyRun, Simulation};
pub use trace::CostTrace;
