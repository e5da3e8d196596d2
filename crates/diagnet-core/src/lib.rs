//! # diagnet-core
//!
//! Foundation crate for the diagnet inference engine.
//! Defines facts, node identifiers, the fact-source trait, errors, config,
//! tracing setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod facts;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::DiagnetConfig;
pub use errors::{DiagnetError, DiagnetResult};
pub use facts::{Fact, FactBundle};
pub use traits::FactSource;
pub use types::{CauseId, EffectId};
