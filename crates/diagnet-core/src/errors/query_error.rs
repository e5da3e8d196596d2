//! Query errors, raised before or during inference.

use super::error_code::{self, DiagnetErrorCode};

/// Errors that reject a single query. The model itself stays usable.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Unknown evidence names: {}", .names.join(", "))]
    UnknownEvidence { names: Vec<String> },

    #[error("Evidence has zero probability under the model")]
    ImpossibleEvidence,
}

impl DiagnetErrorCode for QueryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEvidence { .. } => error_code::QUERY_UNKNOWN_EVIDENCE,
            Self::ImpossibleEvidence => error_code::QUERY_IMPOSSIBLE_EVIDENCE,
        }
    }
}
