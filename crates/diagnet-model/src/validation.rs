//! Structural and numeric checks run on every freshly built model.

use diagnet_core::constants::PROBABILITY_TOLERANCE;
use diagnet_core::errors::ModelError;

use crate::model::DiagnosticModel;
use crate::structure::NodeRef;

/// Reject the model if any prior or CPD is malformed, a parent is dangling,
/// the graph disagrees with a CPD's parents, or the graph has a cycle.
pub fn validate(model: &DiagnosticModel) -> Result<(), ModelError> {
    for node in &model.cause_nodes {
        check_distribution(&node.name, "prior", &node.prior)?;
    }

    for node in &model.effect_nodes {
        let cpd = &node.cpd;
        for parent in &cpd.parents {
            if parent.index() >= model.cause_nodes.len() {
                return Err(ModelError::MissingParent {
                    effect: node.name.clone(),
                    parent: parent.to_string(),
                });
            }
        }
        if cpd.leaks.len() != cpd.parents.len() {
            return Err(ModelError::Validation {
                node: node.name.clone(),
                reason: format!(
                    "{} leaks for {} parents",
                    cpd.leaks.len(),
                    cpd.parents.len()
                ),
            });
        }
        let expected_rows = 1usize << cpd.parents.len();
        if cpd.rows.len() != expected_rows {
            return Err(ModelError::Validation {
                node: node.name.clone(),
                reason: format!(
                    "CPD has {} rows, expected {expected_rows}",
                    cpd.rows.len()
                ),
            });
        }
        for (r, row) in cpd.rows.iter().enumerate() {
            check_distribution(&node.name, &format!("CPD row {r}"), row)?;
        }

        let mut declared = cpd.parents.to_vec();
        declared.sort_unstable();
        if model.graph.parents(node.id) != declared {
            return Err(ModelError::Validation {
                node: node.name.clone(),
                reason: "graph edges do not match CPD parents".to_string(),
            });
        }
    }

    if let Some(cycle) = model.graph.find_cycles().into_iter().next() {
        let path = cycle
            .into_iter()
            .map(|node| match node {
                NodeRef::Cause(c) => model.cause_name(c).to_string(),
                NodeRef::Effect(e) => model.effect_name(e).to_string(),
            })
            .collect();
        return Err(ModelError::CycleDetected { path });
    }

    Ok(())
}

fn check_distribution(node: &str, what: &str, dist: &[f64; 2]) -> Result<(), ModelError> {
    if let Some(p) = dist.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        return Err(ModelError::Validation {
            node: node.to_string(),
            reason: format!("{what} has probability {p} outside [0, 1]"),
        });
    }
    let sum = dist[0] + dist[1];
    if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(ModelError::Validation {
            node: node.to_string(),
            reason: format!("{what} sums to {sum}"),
        });
    }
    Ok(())
}
