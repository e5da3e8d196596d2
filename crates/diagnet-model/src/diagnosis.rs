//! Query orchestration: evidence → pruning → inference → ranking.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use diagnet_core::config::QueryConfig;
use diagnet_core::errors::DiagnetResult;

use crate::evidence::EvidenceSet;
use crate::inference::{rank, InferenceEngine};
use crate::model::DiagnosticModel;
use crate::pruning::CandidatePruner;

/// One ranked cause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    pub cause: String,
    pub probability: f64,
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.4}", self.cause, self.probability)
    }
}

/// Causes ranked by descending posterior, at most `top_n` long.
///
/// Empty when no cause shares an effect with the evidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedResult {
    pub entries: Vec<Diagnosis>,
}

impl RankedResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnosis> {
        self.entries.iter()
    }

    /// Cause names in rank order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.cause.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a Diagnosis;
    type IntoIter = std::slice::Iter<'a, Diagnosis>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Answers diagnosis queries against one model.
#[derive(Debug, Clone)]
pub struct Diagnoser<'m> {
    model: &'m DiagnosticModel,
    config: QueryConfig,
}

impl<'m> Diagnoser<'m> {
    pub fn new(model: &'m DiagnosticModel, config: QueryConfig) -> Self {
        Self { model, config }
    }

    pub fn model(&self) -> &DiagnosticModel {
        self.model
    }

    /// Rank candidate causes for `evidence`.
    ///
    /// Unknown evidence names reject the query before any pruning or
    /// inference happens.
    pub fn diagnose(&self, evidence: &EvidenceSet) -> DiagnetResult<RankedResult> {
        self.config.validate()?;
        let effects = self.model.resolve_evidence(evidence)?;

        let candidates = CandidatePruner::from_config(&self.config).prune(self.model, evidence);
        if candidates.is_empty() {
            debug!(evidence = evidence.len(), "no candidate causes");
            return Ok(RankedResult::default());
        }

        let posteriors = InferenceEngine::new(self.model).posteriors(&candidates, &effects)?;
        let entries = rank(posteriors, self.config.top_n)
            .into_iter()
            .map(|p| Diagnosis {
                cause: p.name,
                probability: p.probability,
            })
            .collect();
        Ok(RankedResult { entries })
    }

    /// Parse comma-separated evidence and diagnose it.
    pub fn diagnose_str(&self, input: &str) -> DiagnetResult<RankedResult> {
        self.diagnose(&EvidenceSet::parse(input))
    }
}
