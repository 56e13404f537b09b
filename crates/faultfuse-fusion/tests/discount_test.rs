use faultfuse_core::{ExpertOpinion, FaultType, MassFunction};
use faultfuse_fusion::{EvidenceDiscounter, ExpertEvidence};

const EPS: f64 = 1e-9;

fn bearing(s: f64) -> MassFunction {
    MassFunction::simple_support(FaultType::BearingFault, s).unwrap()
}

#[test]
fn full_trust_leaves_evidence_unchanged() {
    let m = MassFunction::new([(FaultType::Imbalance, 0.5), (FaultType::Misalignment, 0.3)]).unwrap();
    let d = EvidenceDiscounter::discount(&m, 1.0).unwrap();
    assert!(d.approx_eq(&m, EPS));
}

#[test]
fn zero_trust_yields_total_ignorance() {
    let d = EvidenceDiscounter::discount(&bearing(0.9), 0.0).unwrap();
    assert!(d.is_vacuous());
    assert!((d.ignorance() - 1.0).abs() < EPS);
}

#[test]
fn partial_trust_moves_mass_to_ignorance() {
    let m = MassFunction::new([(FaultType::Imbalance, 0.5), (FaultType::Misalignment, 0.3)]).unwrap();
    let d = EvidenceDiscounter::discount(&m, 0.5).unwrap();
    assert!((d.mass(FaultType::Imbalance) - 0.25).abs() < EPS);
    assert!((d.mass(FaultType::Misalignment) - 0.15).abs() < EPS);
    assert!((d.ignorance() - 0.6).abs() < EPS);
}

#[test]
fn amplification_shrinks_ignorance_geometrically() {
    let d = EvidenceDiscounter::discount(&bearing(0.6), 2.0).unwrap();
    assert!((d.ignorance() - 0.16).abs() < EPS);
    assert!((d.mass(FaultType::BearingFault) - 0.84).abs() < EPS);
}

#[test]
fn amplification_keeps_singleton_proportions() {
    let m = MassFunction::new([(FaultType::Imbalance, 0.4), (FaultType::Looseness, 0.2)]).unwrap();
    let d = EvidenceDiscounter::discount(&m, 3.0).unwrap();
    let ratio = d.mass(FaultType::Imbalance) / d.mass(FaultType::Looseness);
    assert!((ratio - 2.0).abs() < 1e-9);
    assert!((d.total() - 1.0).abs() < EPS);
}

#[test]
fn amplification_cannot_create_evidence_from_ignorance() {
    let d = EvidenceDiscounter::discount(&MassFunction::vacuous(), 5.0).unwrap();
    assert!(d.is_vacuous());

    let certain = bearing(1.0);
    let d = EvidenceDiscounter::discount(&certain, 5.0).unwrap();
    assert_eq!(d, certain);
}

#[test]
fn weights_are_clamped_and_non_finite_means_no_trust() {
    let m = bearing(0.6);
    let over = EvidenceDiscounter::discount(&m, 50.0).unwrap();
    let max = EvidenceDiscounter::discount(&m, 5.0).unwrap();
    assert!(over.approx_eq(&max, EPS));
    assert!((max.ignorance() - 0.4f64.powi(5)).abs() < EPS);

    let negative = EvidenceDiscounter::discount(&m, -1.0).unwrap();
    assert!(negative.is_vacuous());
    let nan = EvidenceDiscounter::discount(&m, f64::NAN).unwrap();
    assert!(nan.is_vacuous());

    assert_eq!(EvidenceDiscounter::normalized_weight(2.5), 0.5);
}

#[test]
fn higher_weight_never_lowers_committed_mass() {
    let m = bearing(0.55);
    let mut previous = -1.0;
    for step in 0..=50 {
        let w = step as f64 * 0.1;
        let d = EvidenceDiscounter::discount(&m, w).unwrap();
        let committed = d.mass(FaultType::BearingFault);
        assert!(committed >= previous - 1e-12, "w = {w}");
        previous = committed;
    }
}

#[test]
fn abstention_stays_vacuous_at_any_weight() {
    let opinion = ExpertOpinion::abstain("no vibration channel");
    let evidence = ExpertEvidence::from_opinion("vibration_expert", 3.0, &opinion).unwrap();
    assert!(evidence.abstained);
    assert!(evidence.raw.is_vacuous());
    assert!(evidence.discounted.is_vacuous());
}

#[test]
fn evidence_keeps_raw_and_discounted_forms() {
    let opinion = ExpertOpinion::Evidence(bearing(0.8));
    let evidence = ExpertEvidence::from_opinion("vibration_expert", 0.5, &opinion).unwrap();
    assert!(!evidence.abstained);
    assert_eq!(evidence.name, "vibration_expert");
    assert!((evidence.raw.mass(FaultType::BearingFault) - 0.8).abs() < EPS);
    assert!((evidence.discounted.mass(FaultType::BearingFault) - 0.4).abs() < EPS);
}
