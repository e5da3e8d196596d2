//! Model construction: aggregate → select → synthesize → validate.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use diagnet_core::config::ModelConfig;
use diagnet_core::errors::{DiagnetResult, ModelError};
use diagnet_core::types::{CauseId, EffectId, NameRegistry, ParentList};
use diagnet_core::{Fact, FactSource};

use crate::aggregation::aggregate;
use crate::cpd::{Cpd, NoisyOr};
use crate::model::{BuildStats, CauseNode, DiagnosticModel, EffectNode};
use crate::pruning::EffectIndex;
use crate::structure::{select_parents, DependencyGraph};
use crate::validation;

/// Fetch every fact from `source` and build a model from them.
///
/// A source failure aborts the build with the source's own error.
pub fn build_from_source<S>(source: &S, config: &ModelConfig) -> DiagnetResult<DiagnosticModel>
where
    S: FactSource + ?Sized,
{
    let facts = source.fetch_facts()?;
    debug!(source = %source.describe(), facts = facts.len(), "fetched facts");
    build_model(&facts, config)
}

/// Build and validate a model from raw facts.
pub fn build_model(facts: &[Fact], config: &ModelConfig) -> DiagnetResult<DiagnosticModel> {
    let started = Instant::now();
    config.validate()?;

    if facts.is_empty() {
        return Err(ModelError::DataUnavailable {
            reason: "the fact source returned no facts".to_string(),
        }
        .into());
    }

    let table = aggregate(facts);
    if table.retained() == 0 {
        return Err(ModelError::DataUnavailable {
            reason: format!(
                "all {} facts were self-loops or had an empty name",
                table.dropped()
            ),
        }
        .into());
    }

    let selection = select_parents(&table, config.max_parents);

    // Model causes: aggregation causes that kept at least one edge, in
    // first-seen order.
    let mut in_structure = vec![false; table.cause_count()];
    for (cause, _) in selection.edges() {
        in_structure[cause.index()] = true;
    }
    let mut cause_registry = NameRegistry::new();
    let mut cause_remap: Vec<Option<CauseId>> = vec![None; table.cause_count()];
    let mut cause_nodes = Vec::new();
    for cause in table.cause_ids().filter(|c| in_structure[c.index()]) {
        let name = table.cause_name(cause);
        let id = CauseId::new(cause_registry.intern(name));
        cause_remap[cause.index()] = Some(id);
        cause_nodes.push(CauseNode {
            id,
            name: name.to_string(),
            count: table.marginal_count(cause),
            prior: [1.0, 0.0],
        });
    }

    let total: u64 = cause_nodes.iter().map(|n| n.count).sum();
    if total == 0 {
        return Err(ModelError::DataUnavailable {
            reason: "selected causes have no prior mass".to_string(),
        }
        .into());
    }
    for node in &mut cause_nodes {
        node.prior = NoisyOr::prior(node.count, total);
    }

    // Model effects: aggregation effects with a non-empty parent list,
    // each paired with its (parent, pair count, parent marginal) rows.
    let mut effect_registry = NameRegistry::new();
    let mut pending: Vec<(EffectId, String, Vec<(CauseId, u64, u64)>)> = Vec::new();
    for effect in table.effect_ids() {
        let parents: Vec<(CauseId, u64, u64)> = selection
            .parents(effect)
            .iter()
            .filter_map(|&(cause, pair_count)| {
                cause_remap[cause.index()]
                    .map(|id| (id, pair_count, table.marginal_count(cause)))
            })
            .collect();
        if parents.is_empty() {
            continue;
        }
        let name = table.effect_name(effect);
        let id = EffectId::new(effect_registry.intern(name));
        pending.push((id, name.to_string(), parents));
    }

    let params = NoisyOr::from_config(config);
    let effect_nodes: Vec<EffectNode> = pending
        .into_par_iter()
        .map(|(id, name, parents)| {
            let leaks = parents
                .iter()
                .map(|&(_, pair_count, marginal)| params.leak(pair_count, marginal))
                .collect();
            let parents: ParentList<CauseId> = parents.iter().map(|&(c, _, _)| c).collect();
            EffectNode {
                id,
                name,
                cpd: Cpd::noisy_or(parents, leaks, &params),
            }
        })
        .collect();

    let mut graph = DependencyGraph::with_nodes(cause_nodes.len(), effect_nodes.len());
    for node in &effect_nodes {
        for &parent in &node.cpd.parents {
            graph.add_edge(parent, node.id);
        }
    }

    let model = DiagnosticModel {
        causes: cause_registry.freeze(),
        effects: effect_registry.freeze(),
        cause_nodes,
        effect_nodes,
        graph,
        effect_index: EffectIndex::from_facts(facts),
        config: config.clone(),
        stats: BuildStats {
            retained_facts: table.retained(),
            dropped_facts: table.dropped(),
        },
    };

    validation::validate(&model)?;

    info!(
        retained = table.retained(),
        dropped = table.dropped(),
        causes = model.cause_count(),
        effects = model.effect_count(),
        edges = model.edge_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "model built"
    );

    Ok(model)
}
