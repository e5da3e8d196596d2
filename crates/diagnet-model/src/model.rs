//! The built, immutable diagnostic model.

use diagnet_core::config::ModelConfig;
use diagnet_core::errors::QueryError;
use diagnet_core::types::{CauseId, EffectId, FrozenRegistry};

use crate::cpd::Cpd;
use crate::evidence::EvidenceSet;
use crate::pruning::EffectIndex;
use crate::structure::DependencyGraph;

/// A cause variable and its prior.
#[derive(Debug, Clone, PartialEq)]
pub struct CauseNode {
    pub id: CauseId,
    pub name: String,
    /// Marginal count over the retained facts.
    pub count: u64,
    /// `[P(absent), P(present)]`.
    pub prior: [f64; 2],
}

/// An effect variable and its CPD.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectNode {
    pub id: EffectId,
    pub name: String,
    pub cpd: Cpd,
}

/// Fact counts seen while building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub retained_facts: usize,
    pub dropped_facts: usize,
}

/// Binary Bayesian network over causes and effects.
///
/// Built once per batch of facts by [`crate::build_model`] and never
/// mutated afterwards. Every query borrows it immutably, so one model can
/// serve any number of threads without locking.
#[derive(Debug)]
pub struct DiagnosticModel {
    pub(crate) causes: FrozenRegistry,
    pub(crate) effects: FrozenRegistry,
    pub(crate) cause_nodes: Vec<CauseNode>,
    pub(crate) effect_nodes: Vec<EffectNode>,
    pub(crate) graph: DependencyGraph,
    pub(crate) effect_index: EffectIndex,
    pub(crate) config: ModelConfig,
    pub(crate) stats: BuildStats,
}

impl DiagnosticModel {
    pub fn cause_count(&self) -> usize {
        self.cause_nodes.len()
    }

    pub fn effect_count(&self) -> usize {
        self.effect_nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Cause nodes in index order.
    pub fn causes(&self) -> &[CauseNode] {
        &self.cause_nodes
    }

    /// Effect nodes in index order.
    pub fn effects(&self) -> &[EffectNode] {
        &self.effect_nodes
    }

    pub fn cause(&self, id: CauseId) -> Option<&CauseNode> {
        self.cause_nodes.get(id.index())
    }

    pub fn effect(&self, id: EffectId) -> Option<&EffectNode> {
        self.effect_nodes.get(id.index())
    }

    pub fn cause_id(&self, name: &str) -> Option<CauseId> {
        self.causes.get(name).map(CauseId::new)
    }

    pub fn effect_id(&self, name: &str) -> Option<EffectId> {
        self.effects.get(name).map(EffectId::new)
    }

    pub fn cause_name(&self, id: CauseId) -> &str {
        self.causes.resolve(id.index()).unwrap_or_default()
    }

    pub fn effect_name(&self, id: EffectId) -> &str {
        self.effects.resolve(id.index()).unwrap_or_default()
    }

    pub fn has_effect(&self, name: &str) -> bool {
        self.effects.contains(name)
    }

    /// Ordered parent list of `effect`.
    pub fn parents(&self, effect: EffectId) -> &[CauseId] {
        self.effect(effect)
            .map(|node| node.cpd.parents.as_slice())
            .unwrap_or(&[])
    }

    /// Parent names of the effect called `name`, in CPD order.
    pub fn parent_names(&self, name: &str) -> Vec<&str> {
        self.effect_id(name)
            .map(|e| self.parents(e).iter().map(|&c| self.cause_name(c)).collect())
            .unwrap_or_default()
    }

    /// Effects `cause` is a parent of.
    pub fn children(&self, cause: CauseId) -> Vec<EffectId> {
        self.graph.children(cause)
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn effect_index(&self) -> &EffectIndex {
        &self.effect_index
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Effect names, sorted alphabetically.
    pub fn effect_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.effects.names().collect();
        names.sort_unstable();
        names
    }

    /// Map evidence names to effect ids.
    ///
    /// Every name must be a model effect; otherwise the query is rejected
    /// with all offending names listed in evidence order.
    pub fn resolve_evidence(&self, evidence: &EvidenceSet) -> Result<Vec<EffectId>, QueryError> {
        let mut resolved = Vec::with_capacity(evidence.len());
        let mut unknown = Vec::new();
        for name in evidence.iter() {
            match self.effect_id(name) {
                Some(id) => resolved.push(id),
                None => unknown.push(name.to_string()),
            }
        }
        if unknown.is_empty() {
            Ok(resolved)
        } else {
            Err(QueryError::UnknownEvidence { names: unknown })
        }
    }
}
