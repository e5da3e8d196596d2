//! Fact source: anything that can supply (cause, effect) records in bulk.

use crate::errors::DiagnetResult;
use crate::facts::Fact;

/// Supplies the co-occurrence records a model is built from.
///
/// Implementations are I/O adapters (relationship store, corpus file).
/// A failure here aborts the model build with the adapter's diagnostic.
pub trait FactSource {
    /// Fetch every record. Records may contain duplicates and self-loops;
    /// filtering is the aggregator's job.
    fn fetch_facts(&self) -> DiagnetResult<Vec<Fact>>;

    /// Human-readable description for log lines.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl FactSource for Vec<Fact> {
    fn fetch_facts(&self) -> DiagnetResult<Vec<Fact>> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory facts ({})", self.len())
    }
}

impl FactSource for [Fact] {
    fn fetch_facts(&self) -> DiagnetResult<Vec<Fact>> {
        Ok(self.to_vec())
    }

    fn describe(&self) -> String {
        format!("in-memory facts ({})", self.len())
    }
}
