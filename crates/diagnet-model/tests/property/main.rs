//! Property tests for model construction and inference.
//!
//!   - prior and CPD row invariants on random fact sets
//!   - noisy-OR monotonicity
//!   - variable elimination against brute-force enumeration of the joint

mod cpd_props;
mod inference_props;

use diagnet_core::Fact;
use proptest::prelude::*;

/// Random facts over a small name space so causes share effects often.
pub fn fact_strategy(causes: usize, effects: usize, max_len: usize) -> impl Strategy<Value = Vec<Fact>> {
    prop::collection::vec((0..causes, 0..effects), 1..max_len).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(c, e)| Fact::new(format!("c{c}"), format!("e{e}")))
            .collect()
    })
}
