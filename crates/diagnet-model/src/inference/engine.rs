//! Per-candidate posterior computation.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use diagnet_core::errors::QueryError;
use diagnet_core::types::{CauseId, EffectId, FxHashSet};

use super::elimination::eliminate;
use super::factor::{Factor, Var};
use crate::model::DiagnosticModel;

/// `P(cause = present | evidence)` for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Posterior {
    pub cause: CauseId,
    pub name: String,
    pub probability: f64,
}

/// Exact inference against a shared, read-only model.
#[derive(Debug, Clone, Copy)]
pub struct InferenceEngine<'m> {
    model: &'m DiagnosticModel,
}

impl<'m> InferenceEngine<'m> {
    pub fn new(model: &'m DiagnosticModel) -> Self {
        Self { model }
    }

    /// Posteriors for every candidate, in candidate order.
    ///
    /// Candidates are independent queries and are evaluated in parallel.
    pub fn posteriors(
        &self,
        candidates: &[CauseId],
        evidence: &[EffectId],
    ) -> Result<Vec<Posterior>, QueryError> {
        debug!(
            candidates = candidates.len(),
            evidence = evidence.len(),
            "running inference"
        );
        candidates
            .par_iter()
            .map(|&cause| -> Result<Posterior, QueryError> {
                Ok(Posterior {
                    cause,
                    name: self.model.cause_name(cause).to_string(),
                    probability: self.posterior(cause, evidence)?,
                })
            })
            .collect()
    }

    /// `P(cause = present | every evidence effect present)`.
    pub fn posterior(&self, cause: CauseId, evidence: &[EffectId]) -> Result<f64, QueryError> {
        let query = Var::Cause(cause);
        let mut factor = eliminate(self.factors(cause, evidence), query);
        if !factor.contains(query) {
            return Err(QueryError::ImpossibleEvidence);
        }
        let z = factor.normalize();
        if !(z > 0.0 && z.is_finite()) {
            return Err(QueryError::ImpossibleEvidence);
        }
        Ok(factor.value(&[(query, true)]))
    }

    /// Factors relevant to one query.
    ///
    /// Non-evidence effects are barren and sum to one, so they are left
    /// out. Causes that neither are the query nor feed an evidence effect
    /// only contribute their own prior, which also sums to one.
    fn factors(&self, query: CauseId, evidence: &[EffectId]) -> Vec<Factor> {
        let mut factors = Vec::with_capacity(evidence.len() * 2 + 1);
        let mut priors: FxHashSet<CauseId> = FxHashSet::default();

        let mut add_prior = |cause: CauseId, factors: &mut Vec<Factor>| {
            if priors.insert(cause) {
                if let Some(node) = self.model.cause(cause) {
                    factors.push(Factor::prior(cause, node.prior));
                }
            }
        };

        add_prior(query, &mut factors);
        for &effect in evidence {
            let Some(node) = self.model.effect(effect) else {
                continue;
            };
            for &parent in &node.cpd.parents {
                add_prior(parent, &mut factors);
            }
            factors.push(Factor::from_cpd(effect, &node.cpd).reduce(Var::Effect(effect), true));
        }
        factors
    }
}
