//! Exact posterior inference by variable elimination.
//!
//! - [`factor`]: dense binary factors with product, sum-out, and reduce
//! - [`elimination`]: greedy min-size elimination over a factor pool
//! - [`engine`]: per-candidate posteriors against a built model
//! - [`ranking`]: top-N selection

pub mod elimination;
pub mod engine;
pub mod factor;
pub mod ranking;

pub use engine::{InferenceEngine, Posterior};
pub use factor::{Factor, Var};
pub use ranking::rank;
