//! Candidate pruning: only causes that share evidence are scored.

use diagnet_core::config::QueryConfig;
use diagnet_core::types::{CauseId, FxHashMap, FxHashSet};
use diagnet_core::Fact;
use tracing::debug;

use crate::evidence::EvidenceSet;
use crate::model::DiagnosticModel;

/// Effect sets per cause over the retained facts, in first-seen cause order.
#[derive(Debug, Clone, Default)]
pub struct EffectIndex {
    entries: Vec<(String, FxHashSet<String>)>,
}

impl EffectIndex {
    pub fn from_facts(facts: &[Fact]) -> Self {
        let mut positions: FxHashMap<&str, usize> = FxHashMap::default();
        let mut entries: Vec<(String, FxHashSet<String>)> = Vec::new();
        for fact in facts.iter().filter(|f| f.is_retainable()) {
            let slot = *positions.entry(fact.cause.as_str()).or_insert_with(|| {
                entries.push((fact.cause.clone(), FxHashSet::default()));
                entries.len() - 1
            });
            entries[slot].1.insert(fact.effect.clone());
        }
        Self { entries }
    }

    /// Effects recorded for `cause`.
    pub fn effects_of(&self, cause: &str) -> Option<&FxHashSet<String>> {
        self.entries
            .iter()
            .find(|(name, _)| name == cause)
            .map(|(_, effects)| effects)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Causes sharing at least `min_overlap` effects with the evidence.
    pub fn candidates(&self, evidence: &EvidenceSet, min_overlap: usize) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, effects)| {
                evidence.iter().filter(|e| effects.contains(*e)).count() >= min_overlap
            })
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Narrows a query to the causes worth running inference for.
#[derive(Debug, Clone, Copy)]
pub struct CandidatePruner {
    pub min_overlap: usize,
}

impl CandidatePruner {
    pub fn new(min_overlap: usize) -> Self {
        Self { min_overlap }
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        Self::new(config.min_overlap)
    }

    /// Candidate causes present in the model, in model index order.
    pub fn prune(&self, model: &DiagnosticModel, evidence: &EvidenceSet) -> Vec<CauseId> {
        let mut candidates: Vec<CauseId> = model
            .effect_index()
            .candidates(evidence, self.min_overlap)
            .into_iter()
            .filter_map(|name| model.cause_id(name))
            .collect();
        candidates.sort_unstable();
        debug!(
            evidence = evidence.len(),
            candidates = candidates.len(),
            "pruned candidates"
        );
        candidates
    }
}

impl Default for CandidatePruner {
    fn default() -> Self {
        Self::from_config(&QueryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(pairs: &[(&str, &str)]) -> EffectIndex {
        let facts: Vec<Fact> = pairs.iter().map(|(c, e)| Fact::new(*c, *e)).collect();
        EffectIndex::from_facts(&facts)
    }

    #[test]
    fn keeps_causes_sharing_evidence() {
        let index = index(&[("A", "x"), ("A", "y"), ("B", "z")]);
        let candidates = index.candidates(&EvidenceSet::parse("x"), 1);
        assert_eq!(candidates, vec!["A"]);
    }

    #[test]
    fn min_overlap_filters_weak_matches() {
        let index = index(&[("A", "x"), ("A", "y"), ("B", "x")]);
        let evidence = EvidenceSet::parse("x, y");
        assert_eq!(index.candidates(&evidence, 1), vec!["A", "B"]);
        assert_eq!(index.candidates(&evidence, 2), vec!["A"]);
    }

    #[test]
    fn ignores_self_loops() {
        let index = index(&[("A", "A"), ("B", "x")]);
        assert_eq!(index.len(), 1);
        assert!(index.effects_of("A").is_none());
    }

    #[test]
    fn empty_evidence_has_no_candidates() {
        let index = index(&[("A", "x")]);
        assert!(index.candidates(&EvidenceSet::default(), 1).is_empty());
    }
}
