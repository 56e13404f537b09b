use faultfuse_core::{FaultType, FrameOfDiscernment, MassFunction};
use faultfuse_fusion::{ConflictPenalty, DsFusionCore, EvidenceDiscounter};
use proptest::prelude::*;

fn arb_singleton() -> impl Strategy<Value = FaultType> {
    (0..FrameOfDiscernment::size()).prop_map(|i| FrameOfDiscernment::SINGLETONS[i])
}

/// Mass functions that always keep some ignorance, so no pair is in total
/// conflict.
fn arb_mass() -> impl Strategy<Value = MassFunction> {
    (
        proptest::collection::btree_map(arb_singleton(), 0.0f64..1.0, 0..4),
        0.05f64..0.95,
    )
        .prop_map(|(raw, budget)| {
            let sum: f64 = raw.values().sum();
            let scale = if sum > 0.0 { budget / sum } else { 0.0 };
            MassFunction::new(raw.into_iter().map(|(h, m)| (h, m * scale))).unwrap()
        })
}

fn core(c: f64) -> DsFusionCore {
    DsFusionCore::default().with_penalty(ConflictPenalty::new(c).unwrap())
}

proptest! {
    #[test]
    fn combination_conserves_mass(a in arb_mass(), b in arb_mass(), c in 0.0f64..=1.0) {
        let pair = core(c).combine(&a, &b).unwrap();
        prop_assert!((pair.mass.total() - 1.0).abs() <= 1e-6);
        prop_assert!(pair.mass.ignorance() >= 0.0);
        prop_assert!((0.0..=1.0).contains(&pair.conflict));
    }

    #[test]
    fn combination_is_commutative(a in arb_mass(), b in arb_mass(), c in 0.0f64..=1.0) {
        let ab = core(c).combine(&a, &b).unwrap();
        let ba = core(c).combine(&b, &a).unwrap();
        prop_assert!(ab.mass.approx_eq(&ba.mass, 1e-9));
        prop_assert!((ab.conflict - ba.conflict).abs() <= 1e-12);
    }

    #[test]
    fn pure_dempster_is_associative(a in arb_mass(), b in arb_mass(), m in arb_mass()) {
        let fusion = core(0.0);
        let ab = fusion.combine(&a, &b).unwrap().mass;
        let left = fusion.combine(&ab, &m).unwrap().mass;
        let bm = fusion.combine(&b, &m).unwrap().mass;
        let right = fusion.combine(&a, &bm).unwrap().mass;
        prop_assert!(left.approx_eq(&right, 1e-6));
    }

    #[test]
    fn fusion_is_order_independent_for_every_penalty(
        a in arb_mass(),
        b in arb_mass(),
        m in arb_mass(),
        d in arb_mass(),
        c in 0.0f64..=1.0,
    ) {
        let fusion = core(c);
        let forward = fusion.combine_all(&[a.clone(), b.clone(), m.clone(), d.clone()]).unwrap();
        let reversed = fusion.combine_all(&[d.clone(), m.clone(), b.clone(), a.clone()]).unwrap();
        let shuffled = fusion.combine_all(&[b, d, a, m]).unwrap();
        prop_assert!(forward.fused.approx_eq(&reversed.fused, 1e-6));
        prop_assert!(forward.fused.approx_eq(&shuffled.fused, 1e-6));
        prop_assert!((forward.conflict_mass() - reversed.conflict_mass()).abs() <= 1e-9);
        prop_assert!((forward.conflict_mass() - shuffled.conflict_mass()).abs() <= 1e-9);
    }

    #[test]
    fn vacuous_is_neutral(a in arb_mass(), c in 0.0f64..=1.0) {
        let pair = core(c).combine(&a, &MassFunction::vacuous()).unwrap();
        prop_assert!(pair.mass.approx_eq(&a, 1e-9));
        prop_assert_eq!(pair.conflict, 0.0);
    }

    #[test]
    fn redistribution_never_increases_singleton_mass(a in arb_mass(), b in arb_mass()) {
        let normalized = core(0.0).combine(&a, &b).unwrap().mass;
        let redistributed = core(1.0).combine(&a, &b).unwrap().mass;
        for h in FrameOfDiscernment::SINGLETONS {
            prop_assert!(redistributed.mass(h) <= normalized.mass(h) + 1e-9);
        }
    }

    #[test]
    fn discounting_is_monotone_in_weight(a in arb_mass(), w1 in 0.0f64..5.0, w2 in 0.0f64..5.0) {
        let (lo, hi) = if w1 <= w2 { (w1, w2) } else { (w2, w1) };
        let d_lo = EvidenceDiscounter::discount(&a, lo).unwrap();
        let d_hi = EvidenceDiscounter::discount(&a, hi).unwrap();
        for h in FrameOfDiscernment::SINGLETONS {
            prop_assert!(d_hi.mass(h) >= d_lo.mass(h) - 1e-9);
        }
        prop_assert!(d_hi.ignorance() <= d_lo.ignorance() + 1e-9);
        prop_assert!((d_hi.total() - 1.0).abs() <= 1e-6);
    }
}
