//! Top-N selection of posteriors.

use super::engine::Posterior;

/// Sort descending by probability and keep the first `top_n`.
///
/// The sort is stable, so equal probabilities keep their input order.
pub fn rank(mut posteriors: Vec<Posterior>, top_n: usize) -> Vec<Posterior> {
    posteriors.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    posteriors.truncate(top_n);
    posteriors
}
