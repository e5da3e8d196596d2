//! Bounded-parent noisy-OR approximation.
//!
//! Each parent `i` independently activates the effect with probability
//! `leak_i`. With every parent absent the effect still occurs with
//! probability `base_prob`. Any active parent replaces that baseline:
//!
//! ```text
//! P(absent | combo) = f(combo) * Π_{i active} (1 - leak_i)
//! f(combo)          = 1 - base_prob   if no parent is active
//!                     1               otherwise
//! ```
//!
//! A parent whose leak is below `base_prob` therefore lowers P(present)
//! when it alone is active. Causes linked to many effects hit this often.

use diagnet_core::config::ModelConfig;

/// Smoothing parameters for CPD and prior synthesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoisyOr {
    pub base_prob: f64,
    pub default_leak: f64,
}

impl NoisyOr {
    pub fn new(base_prob: f64, default_leak: f64) -> Self {
        Self {
            base_prob,
            default_leak,
        }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.base_prob, config.default_leak)
    }

    /// Activation probability of a parent: `pair_count / marginal_count`,
    /// or `default_leak` when the parent was never observed.
    pub fn leak(&self, pair_count: u64, marginal_count: u64) -> f64 {
        if marginal_count == 0 {
            self.default_leak
        } else {
            pair_count as f64 / marginal_count as f64
        }
    }

    /// Enumerate `[P(absent), P(present)]` for every parent combination.
    ///
    /// Row `r` encodes the combination with the first parent as the most
    /// significant bit, so row 0 is all-absent and the last row all-present.
    /// No parents yields the single baseline row.
    pub fn rows(&self, leaks: &[f64]) -> Vec<[f64; 2]> {
        let n = leaks.len();
        (0..1usize << n)
            .map(|combo| {
                let mut absent = if combo == 0 { 1.0 - self.base_prob } else { 1.0 };
                for (i, leak) in leaks.iter().enumerate() {
                    if combo >> (n - 1 - i) & 1 == 1 {
                        absent *= 1.0 - leak;
                    }
                }
                [absent, 1.0 - absent]
            })
            .collect()
    }

    /// Cause prior `[P(absent), P(present)]` from its share of the total
    /// marginal count. Callers guarantee `total > 0`.
    pub fn prior(count: u64, total: u64) -> [f64; 2] {
        let present = count as f64 / total as f64;
        [1.0 - present, present]
    }
}

impl Default for NoisyOr {
    fn default() -> Self {
        Self::from_config(&ModelConfig::default())
    }
}
