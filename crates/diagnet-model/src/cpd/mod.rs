//! Conditional probability tables for effect nodes.
//!
//! Noisy-OR synthesis lives in [`noisy_or`]; the resulting table type in
//! [`table`].

pub mod noisy_or;
pub mod table;

pub use noisy_or::NoisyOr;
pub use table::Cpd;
