use faultfuse_core::{FaultType, FrameOfDiscernment, MassFunction};
use proptest::prelude::*;

fn arb_singleton() -> impl Strategy<Value = FaultType> {
    (0..FrameOfDiscernment::size()).prop_map(|i| FrameOfDiscernment::SINGLETONS[i])
}

/// Up to three distinct singletons with raw weights, scaled so their sum
/// stays at or below `budget`.
fn arb_masses() -> impl Strategy<Value = Vec<(FaultType, f64)>> {
    (
        proptest::collection::btree_map(arb_singleton(), 0.0f64..1.0, 0..4),
        0.0f64..=1.0,
    )
        .prop_map(|(raw, budget)| {
            let sum: f64 = raw.values().sum();
            let scale = if sum > 0.0 { budget / sum } else { 0.0 };
            raw.into_iter().map(|(h, m)| (h, m * scale)).collect()
        })
}

proptest! {
    #[test]
    fn valid_functions_sum_to_one(entries in arb_masses()) {
        let m = MassFunction::new(entries).unwrap();
        prop_assert!((m.total() - 1.0).abs() <= 1e-6);
        prop_assert!(m.ignorance() >= 0.0);
    }

    #[test]
    fn belief_never_exceeds_plausibility(entries in arb_masses()) {
        let m = MassFunction::new(entries).unwrap();
        for h in FrameOfDiscernment::hypotheses() {
            prop_assert!(m.belief(h) <= m.plausibility(h) + 1e-12);
        }
    }

    #[test]
    fn argmax_is_a_maximum(entries in arb_masses()) {
        let m = MassFunction::new(entries).unwrap();
        if let Some((best, mass)) = m.argmax() {
            prop_assert!(!best.is_universal());
            for (_, other) in m.singletons() {
                prop_assert!(other <= mass);
            }
        } else {
            prop_assert!(m.is_vacuous());
        }
    }

    #[test]
    fn scaling_singletons_past_one_is_rejected(h in arb_singleton(), extra in 0.01f64..1.0) {
        prop_assert!(MassFunction::new([(h, 1.0 + extra)]).is_err());
    }
}
