//! Model construction errors.

use super::error_code::{self, DiagnetErrorCode};

/// Errors that abort building a diagnostic model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("No model can be built: {reason}")]
    DataUnavailable { reason: String },

    #[error("Validation failed for node '{node}': {reason}")]
    Validation { node: String, reason: String },

    #[error("Effect '{effect}' declares missing parent '{parent}'")]
    MissingParent { effect: String, parent: String },

    #[error("Cycle detected in dependency graph: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

impl DiagnetErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DataUnavailable { .. } => error_code::MODEL_DATA_UNAVAILABLE,
            Self::Validation { .. } => error_code::MODEL_VALIDATION,
            Self::MissingParent { .. } => error_code::MODEL_MISSING_PARENT,
            Self::CycleDetected { .. } => error_code::MODEL_CYCLE,
        }
    }
}
