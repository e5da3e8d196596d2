//! Co-occurrence records supplied by the fact source.

use serde::{Deserialize, Serialize};

/// A single (cause, effect) co-occurrence record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub cause: String,
    pub effect: String,
}

impl Fact {
    pub fn new(cause: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
            effect: effect.into(),
        }
    }

    /// Whether this fact survives aggregation: both names non-empty and
    /// the cause distinct from the effect.
    pub fn is_retainable(&self) -> bool {
        !self.cause.is_empty() && !self.effect.is_empty() && self.cause != self.effect
    }
}

/// One cause with all of its effects, the unit of the knowledge corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactBundle {
    pub cause: String,
    pub effects: Vec<String>,
}

impl FactBundle {
    pub fn new(cause: impl Into<String>, effects: Vec<String>) -> Self {
        Self {
            cause: cause.into(),
            effects,
        }
    }

    /// Flatten into one fact per effect, preserving effect order.
    pub fn to_facts(&self) -> Vec<Fact> {
        self.effects
            .iter()
            .map(|effect| Fact::new(self.cause.clone(), effect.clone()))
            .collect()
    }
}
