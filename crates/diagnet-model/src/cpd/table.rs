//! CPD table of a single effect node.

use serde::Serialize;

use diagnet_core::types::{CauseId, ParentList};

use super::noisy_or::NoisyOr;

/// `P(effect | parents)` as `2^n` rows of `[P(absent), P(present)]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cpd {
    /// Ordered parent list; the first parent is the most significant bit of
    /// the row index.
    pub parents: ParentList<CauseId>,
    /// Activation probability per parent, aligned with `parents`.
    pub leaks: Vec<f64>,
    pub rows: Vec<[f64; 2]>,
}

impl Cpd {
    /// Synthesize the noisy-OR table for `parents` with the given leaks.
    pub fn noisy_or(parents: ParentList<CauseId>, leaks: Vec<f64>, params: &NoisyOr) -> Self {
        let rows = params.rows(&leaks);
        Self {
            parents,
            leaks,
            rows,
        }
    }

    pub fn parent_count(&self) -> usize {
        self.parents.len()
    }

    /// Row index of a parent assignment given in parent order.
    pub fn row_index(&self, states: &[bool]) -> usize {
        states
            .iter()
            .fold(0, |acc, &on| (acc << 1) | usize::from(on))
    }

    /// `P(present | states)` for a parent assignment given in parent order.
    pub fn p_present(&self, states: &[bool]) -> f64 {
        self.rows
            .get(self.row_index(states))
            .map(|row| row[1])
            .unwrap_or(0.0)
    }
}
