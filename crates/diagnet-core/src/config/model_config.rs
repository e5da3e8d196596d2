//! Model construction parameters.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_PROB, DEFAULT_LEAK, DEFAULT_MAX_PARENTS, MAX_PARENTS_LIMIT};
use crate::errors::ConfigError;

/// Parameters for structure selection and CPD synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Parents kept per effect (top-K by co-occurrence). 1..=20.
    pub max_parents: usize,
    /// Probability an effect is present with every parent absent.
    pub base_prob: f64,
    /// Activation probability for a parent with zero marginal count.
    pub default_leak: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_parents: DEFAULT_MAX_PARENTS,
            base_prob: DEFAULT_BASE_PROB,
            default_leak: DEFAULT_LEAK,
        }
    }
}

impl ModelConfig {
    pub fn with_max_parents(max_parents: usize) -> Self {
        Self {
            max_parents,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_parents == 0 || self.max_parents > MAX_PARENTS_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "model.max_parents".to_string(),
                message: format!(
                    "{} is outside 1..={MAX_PARENTS_LIMIT}",
                    self.max_parents
                ),
            });
        }
        if !(self.base_prob > 0.0 && self.base_prob < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "model.base_prob".to_string(),
                message: format!("{} is outside (0, 1)", self.base_prob),
            });
        }
        if !(0.0..=1.0).contains(&self.default_leak) {
            return Err(ConfigError::InvalidValue {
                field: "model.default_leak".to_string(),
                message: format!("{} is outside [0, 1]", self.default_leak),
            });
        }
        Ok(())
    }
}
