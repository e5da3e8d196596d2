//! # diagnet-model
//!
//! Builds a binary Bayesian network from (cause, effect) co-occurrence
//! facts and ranks causes by exact posterior probability given observed
//! effects.
//!
//! Build: [`aggregation`] → [`structure`] → [`cpd`] → [`validation`],
//! producing an immutable [`DiagnosticModel`].
//! Query: [`evidence`] → [`pruning`] → [`inference`] → ranked results,
//! orchestrated by [`Diagnoser`].

pub mod aggregation;
pub mod builder;
pub mod cpd;
pub mod diagnosis;
pub mod evidence;
pub mod inference;
pub mod model;
pub mod pruning;
pub mod structure;
pub mod summary;
pub mod validation;

pub use aggregation::{aggregate, Cooccurrence};
pub use builder::{build_model, build_from_source};
pub use cpd::{Cpd, NoisyOr};
pub use diagnosis::{Diagnoser, Diagnosis, RankedResult};
pub use evidence::EvidenceSet;
pub use inference::{rank, InferenceEngine, Posterior};
pub use model::{BuildStats, CauseNode, DiagnosticModel, EffectNode};
pub use pruning::{CandidatePruner, EffectIndex};
pub use structure::{select_parents, DependencyGraph, ParentSelection};
pub use summary::ModelSummary;
