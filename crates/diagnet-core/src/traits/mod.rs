//! Seams to external collaborators.

pub mod fact_source;

pub use fact_source::FactSource;
