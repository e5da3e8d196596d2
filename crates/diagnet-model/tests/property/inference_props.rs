use diagnet_core::config::ModelConfig;
use diagnet_core::types::{CauseId, EffectId};
use diagnet_model::{build_model, DiagnosticModel, InferenceEngine};
use proptest::prelude::*;

use crate::fact_strategy;

/// `P(cause = present | evidence)` by summing the full joint over every
/// cause and every non-evidence effect.
fn brute_force(model: &DiagnosticModel, query: CauseId, evidence: &[EffectId]) -> f64 {
    let n_causes = model.cause_count();
    let free: Vec<EffectId> = model
        .effects()
        .iter()
        .map(|e| e.id)
        .filter(|id| !evidence.contains(id))
        .collect();

    let mut joint_present = 0.0;
    let mut evidence_mass = 0.0;
    for causes in 0..1usize << n_causes {
        let on = |c: CauseId| causes >> c.index() & 1 == 1;
        let mut p_causes = 1.0;
        for node in model.causes() {
            p_causes *= node.prior[usize::from(on(node.id))];
        }
        for free_states in 0..1usize << free.len() {
            let mut p = p_causes;
            for effect in model.effects() {
                let states: Vec<bool> = effect.cpd.parents.iter().map(|&c| on(c)).collect();
                let row = effect.cpd.rows[effect.cpd.row_index(&states)];
                let present = match free.iter().position(|&f| f == effect.id) {
                    Some(slot) => free_states >> slot & 1 == 1,
                    None => true,
                };
                p *= row[usize::from(present)];
            }
            evidence_mass += p;
            if on(query) {
                joint_present += p;
            }
        }
    }
    joint_present / evidence_mass
}

fn small_model() -> impl Strategy<Value = (DiagnosticModel, Vec<EffectId>)> {
    (fact_strategy(4, 4, 14), 1usize..4, any::<u8>()).prop_map(|(facts, k, mask)| {
        let model = build_model(&facts, &ModelConfig::with_max_parents(k)).unwrap();
        let evidence = (0..model.effect_count())
            .filter(|i| mask >> i & 1 == 1)
            .map(EffectId::new)
            .collect();
        (model, evidence)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Variable elimination is exact.
    #[test]
    fn prop_elimination_matches_enumeration((model, evidence) in small_model()) {
        let engine = InferenceEngine::new(&model);
        for cause in model.causes() {
            let exact = brute_force(&model, cause.id, &evidence);
            let got = engine.posterior(cause.id, &evidence).unwrap();
            prop_assert!(
                (exact - got).abs() < 1e-9,
                "{}: elimination {got} vs enumeration {exact}", cause.name
            );
        }
    }

    /// Posteriors are probabilities.
    #[test]
    fn prop_posteriors_are_bounded((model, evidence) in small_model()) {
        let engine = InferenceEngine::new(&model);
        let ids: Vec<CauseId> = model.causes().iter().map(|c| c.id).collect();
        for posterior in engine.posteriors(&ids, &evidence).unwrap() {
            prop_assert!((0.0..=1.0 + 1e-12).contains(&posterior.probability));
        }
    }
}
