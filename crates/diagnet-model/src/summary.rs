//! Serializable snapshot of a built model.

use serde::Serialize;

use crate::model::DiagnosticModel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CauseSummary {
    pub name: String,
    pub count: u64,
    pub prior: f64,
    /// Effects this cause is a parent of, in effect index order.
    pub children: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectSummary {
    pub name: String,
    pub parents: Vec<String>,
    pub leaks: Vec<f64>,
    /// `P(present | combo)` per CPD row.
    pub present: Vec<f64>,
}

/// Everything needed to inspect a model outside the process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub max_parents: usize,
    pub retained_facts: usize,
    pub dropped_facts: usize,
    pub edge_count: usize,
    pub causes: Vec<CauseSummary>,
    pub effects: Vec<EffectSummary>,
}

impl ModelSummary {
    pub fn from_model(model: &DiagnosticModel) -> Self {
        let causes = model
            .causes()
            .iter()
            .map(|node| CauseSummary {
                name: node.name.clone(),
                count: node.count,
                prior: node.prior[1],
                children: model
                    .children(node.id)
                    .into_iter()
                    .map(|e| model.effect_name(e).to_string())
                    .collect(),
            })
            .collect();
        let effects = model
            .effects()
            .iter()
            .map(|node| EffectSummary {
                name: node.name.clone(),
                parents: node
                    .cpd
                    .parents
                    .iter()
                    .map(|&p| model.cause_name(p).to_string())
                    .collect(),
                leaks: node.cpd.leaks.clone(),
                present: node.cpd.rows.iter().map(|row| row[1]).collect(),
            })
            .collect();
        let stats = model.stats();
        Self {
            max_parents: model.config().max_parents,
            retained_facts: stats.retained_facts,
            dropped_facts: stats.dropped_facts,
            edge_count: model.edge_count(),
            causes,
            effects,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
