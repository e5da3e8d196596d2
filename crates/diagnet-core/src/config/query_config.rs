//! Query parameters.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MIN_OVERLAP, DEFAULT_TOP_N};
use crate::errors::ConfigError;

/// Parameters for candidate pruning and result ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Number of ranked causes returned.
    pub top_n: usize,
    /// Minimum number of evidence effects a cause must share to be scored.
    pub min_overlap: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_overlap: DEFAULT_MIN_OVERLAP,
        }
    }
}

impl QueryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::InvalidValue {
                field: "query.top_n".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.min_overlap == 0 {
            return Err(ConfigError::InvalidValue {
                field: "query.min_overlap".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
