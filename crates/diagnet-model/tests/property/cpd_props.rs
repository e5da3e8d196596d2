use diagnet_core::config::ModelConfig;
use diagnet_core::constants::PROBABILITY_TOLERANCE;
use diagnet_model::{build_model, NoisyOr};
use proptest::prelude::*;

use crate::fact_strategy;

proptest! {
    /// Priors are shares of the structure causes' marginal counts.
    #[test]
    fn prop_priors_are_count_shares(facts in fact_strategy(6, 6, 40), k in 1usize..6) {
        let model = build_model(&facts, &ModelConfig::with_max_parents(k)).unwrap();
        let total: u64 = model.causes().iter().map(|c| c.count).sum();
        let mut mass = 0.0;
        for cause in model.causes() {
            prop_assert!((0.0..=1.0).contains(&cause.prior[1]));
            prop_assert!((cause.prior[1] - cause.count as f64 / total as f64).abs() < 1e-12);
            mass += cause.prior[1];
        }
        prop_assert!((mass - 1.0).abs() < 1e-9);
    }

    /// Every CPD has 2^#parents rows, each a distribution, and no effect
    /// keeps more than k parents.
    #[test]
    fn prop_cpd_rows_are_distributions(facts in fact_strategy(8, 5, 60), k in 1usize..6) {
        let model = build_model(&facts, &ModelConfig::with_max_parents(k)).unwrap();
        for effect in model.effects() {
            let cpd = &effect.cpd;
            prop_assert!(cpd.parents.len() <= k);
            prop_assert!(!cpd.parents.is_empty());
            prop_assert_eq!(cpd.rows.len(), 1usize << cpd.parents.len());
            for row in &cpd.rows {
                prop_assert!(row.iter().all(|p| (0.0..=1.0).contains(p)));
                prop_assert!((row[0] + row[1] - 1.0).abs() <= PROBABILITY_TOLERANCE);
            }
        }
    }

    /// Among combinations with at least one active parent, turning another
    /// parent on never lowers P(present).
    #[test]
    fn prop_noisy_or_is_monotone_among_active(
        leaks in prop::collection::vec(0.0f64..=1.0, 1..6),
        base in 0.001f64..0.999,
    ) {
        let rows = NoisyOr::new(base, 0.6).rows(&leaks);
        for combo in 1..rows.len() {
            for bit in 0..leaks.len() {
                let on = combo | (1 << bit);
                prop_assert!(
                    rows[on][1] + 1e-12 >= rows[combo][1],
                    "combo {combo} -> {on}: {} < {}", rows[on][1], rows[combo][1]
                );
            }
        }
    }

    /// Leaving the all-absent row through parent i never lowers P(present)
    /// when leak_i is at least base_prob.
    #[test]
    fn prop_noisy_or_rises_from_baseline_when_leak_covers_base(
        leaks in prop::collection::vec(0.0f64..=1.0, 1..6),
        base in 0.001f64..0.999,
    ) {
        let n = leaks.len();
        let rows = NoisyOr::new(base, 0.6).rows(&leaks);
        for (i, leak) in leaks.iter().enumerate() {
            let single = 1usize << (n - 1 - i);
            prop_assert!((rows[single][1] - leak).abs() <= 1e-12);
            if *leak >= base {
                prop_assert!(rows[single][1] + 1e-12 >= rows[0][1]);
            }
        }
    }

    /// Same facts, same k: identical structure and tables.
    #[test]
    fn prop_build_is_deterministic(facts in fact_strategy(5, 5, 30), k in 1usize..4) {
        let a = build_model(&facts, &ModelConfig::with_max_parents(k)).unwrap();
        let b = build_model(&facts, &ModelConfig::with_max_parents(k)).unwrap();
        prop_assert_eq!(a.causes(), b.causes());
        prop_assert_eq!(a.effects(), b.effects());
    }
}
