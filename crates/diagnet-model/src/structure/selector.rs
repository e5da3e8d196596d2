//! Top-K parent selection per effect.

use diagnet_core::types::{CauseId, EffectId, ParentList};

use crate::aggregation::Cooccurrence;

/// Parents chosen for every effect, indexed by the aggregation's effect ids.
#[derive(Debug, Clone)]
pub struct ParentSelection {
    parents_by_effect: Vec<ParentList<(CauseId, u64)>>,
}

/// For every effect, keep the `max_parents` causes it co-occurs with most.
///
/// The sort is stable, so causes with equal counts keep the order in which
/// they were first seen with the effect. Effects end up with an empty list
/// only when they had no recorded cause; such effects are left out of the
/// model.
pub fn select_parents(table: &Cooccurrence, max_parents: usize) -> ParentSelection {
    let parents_by_effect = table
        .effect_ids()
        .map(|effect| {
            let mut ranked: Vec<(CauseId, u64)> = table.cause_counts(effect).to_vec();
            ranked.sort_by(|a, b| b.1.cmp(&a.1));
            ranked.into_iter().take(max_parents).collect()
        })
        .collect();

    ParentSelection { parents_by_effect }
}

impl ParentSelection {
    /// Selected parents of `effect` with their pair counts, highest first.
    pub fn parents(&self, effect: EffectId) -> &[(CauseId, u64)] {
        self.parents_by_effect
            .get(effect.index())
            .map(|p| p.as_slice())
            .unwrap_or(&[])
    }

    /// Every (parent, effect) edge, grouped by effect in effect order.
    pub fn edges(&self) -> impl Iterator<Item = (CauseId, EffectId)> + '_ {
        self.parents_by_effect
            .iter()
            .enumerate()
            .flat_map(|(e, parents)| {
                parents
                    .iter()
                    .map(move |(cause, _)| (*cause, EffectId::new(e)))
            })
    }

    pub fn edge_count(&self) -> usize {
        self.parents_by_effect.iter().map(|p| p.len()).sum()
    }

    pub fn effect_count(&self) -> usize {
        self.parents_by_effect.len()
    }
}
