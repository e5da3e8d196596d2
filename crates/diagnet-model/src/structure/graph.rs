//! Directed cause→effect dependency graph.
//!
//! Causes are roots and effects are leaves, so the graph is bipartite and
//! acyclic by construction. [`DependencyGraph::find_cycles`] still runs
//! Tarjan's SCC at validation time, the same check any DAG edit gets.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use diagnet_core::types::{CauseId, EffectId};

/// Node payload: which table the node indexes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Cause(CauseId),
    Effect(EffectId),
}

/// Immutable structure of a built model.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    graph: DiGraph<NodeRef, ()>,
    cause_nodes: Vec<NodeIndex>,
    effect_nodes: Vec<NodeIndex>,
}

impl DependencyGraph {
    /// Create a graph with `causes` cause nodes and `effects` effect nodes
    /// and no edges.
    pub fn with_nodes(causes: usize, effects: usize) -> Self {
        let mut graph = DiGraph::with_capacity(causes + effects, 0);
        let cause_nodes = (0..causes)
            .map(|i| graph.add_node(NodeRef::Cause(CauseId::new(i))))
            .collect();
        let effect_nodes = (0..effects)
            .map(|i| graph.add_node(NodeRef::Effect(EffectId::new(i))))
            .collect();
        Self {
            graph,
            cause_nodes,
            effect_nodes,
        }
    }

    /// Add a parent edge. Returns `false` if either endpoint is unknown.
    pub fn add_edge(&mut self, parent: CauseId, child: EffectId) -> bool {
        match (
            self.cause_nodes.get(parent.index()),
            self.effect_nodes.get(child.index()),
        ) {
            (Some(&from), Some(&to)) => {
                self.graph.update_edge(from, to, ());
                true
            }
            _ => false,
        }
    }

    pub fn cause_count(&self) -> usize {
        self.cause_nodes.len()
    }

    pub fn effect_count(&self) -> usize {
        self.effect_nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Effects that `cause` is a parent of.
    pub fn children(&self, cause: CauseId) -> Vec<EffectId> {
        let Some(&node) = self.cause_nodes.get(cause.index()) else {
            return Vec::new();
        };
        let mut children: Vec<EffectId> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .filter_map(|n| match self.graph[n] {
                NodeRef::Effect(e) => Some(e),
                NodeRef::Cause(_) => None,
            })
            .collect();
        children.sort_unstable();
        children
    }

    /// Causes that point at `effect`.
    pub fn parents(&self, effect: EffectId) -> Vec<CauseId> {
        let Some(&node) = self.effect_nodes.get(effect.index()) else {
            return Vec::new();
        };
        let mut parents: Vec<CauseId> = self
            .graph
            .neighbors_directed(node, Direction::Incoming)
            .filter_map(|n| match self.graph[n] {
                NodeRef::Cause(c) => Some(c),
                NodeRef::Effect(_) => None,
            })
            .collect();
        parents.sort_unstable();
        parents
    }

    /// Strongly connected components with more than one node, plus
    /// self-loops. Empty for a valid model.
    pub fn find_cycles(&self) -> Vec<Vec<NodeRef>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| {
                scc.len() > 1 || self.graph.find_edge(scc[0], scc[0]).is_some()
            })
            .map(|scc| scc.into_iter().map(|n| self.graph[n]).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_connect_causes_to_effects() {
        let mut graph = DependencyGraph::with_nodes(2, 3);
        assert!(graph.add_edge(CauseId::new(0), EffectId::new(0)));
        assert!(graph.add_edge(CauseId::new(1), EffectId::new(0)));
        assert!(graph.add_edge(CauseId::new(0), EffectId::new(2)));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.children(CauseId::new(0)),
            vec![EffectId::new(0), EffectId::new(2)]
        );
        assert_eq!(
            graph.parents(EffectId::new(0)),
            vec![CauseId::new(0), CauseId::new(1)]
        );
    }

    #[test]
    fn duplicate_edges_are_collapsed() {
        let mut graph = DependencyGraph::with_nodes(1, 1);
        graph.add_edge(CauseId::new(0), EffectId::new(0));
        graph.add_edge(CauseId::new(0), EffectId::new(0));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn unknown_endpoints_are_rejected() {
        let mut graph = DependencyGraph::with_nodes(1, 1);
        assert!(!graph.add_edge(CauseId::new(3), EffectId::new(0)));
        assert!(!graph.add_edge(CauseId::new(0), EffectId::new(9)));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn bipartite_graph_has_no_cycles() {
        let mut graph = DependencyGraph::with_nodes(3, 3);
        for c in 0..3 {
            for e in 0..3 {
                graph.add_edge(CauseId::new(c), EffectId::new(e));
            }
        }
        assert!(graph.find_cycles().is_empty());
    }
}
