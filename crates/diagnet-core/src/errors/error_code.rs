//! DiagnetErrorCode trait: stable machine-readable codes for every error.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait DiagnetErrorCode {
    /// Returns the error code string (e.g., "MODEL_VALIDATION").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MODEL_DATA_UNAVAILABLE: &str = "MODEL_DATA_UNAVAILABLE";
pub const MODEL_VALIDATION: &str = "MODEL_VALIDATION";
pub const MODEL_MISSING_PARENT: &str = "MODEL_MISSING_PARENT";
pub const MODEL_CYCLE: &str = "MODEL_CYCLE";
pub const QUERY_UNKNOWN_EVIDENCE: &str = "QUERY_UNKNOWN_EVIDENCE";
pub const QUERY_IMPOSSIBLE_EVIDENCE: &str = "QUERY_IMPOSSIBLE_EVIDENCE";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CORPUS_ERROR: &str = "CORPUS_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
