use criterion::{black_box, criterion_group, criterion_main, Criterion};

use faultfuse_core::{FaultType, FrameOfDiscernment, MassFunction};
use faultfuse_fusion::{ConflictPenalty, DecisionRule, DsFusionCore, EvidenceDiscounter};

/// `n` moderately conflicting mass functions spread over the frame.
fn make_masses(n: usize) -> Vec<MassFunction> {
    (0..n)
        .map(|i| {
            let primary = FrameOfDiscernment::SINGLETONS[i % FrameOfDiscernment::size()];
            let secondary = FrameOfDiscernment::SINGLETONS[(i + 3) % FrameOfDiscernment::size()];
            MassFunction::new([(primary, 0.45), (secondary, 0.15)]).unwrap()
        })
        .collect()
}

fn bench_fold_3_experts(c: &mut Criterion) {
    let masses = make_masses(3);
    let fusion = DsFusionCore::default();
    c.bench_function("fold_3_experts", |b| {
        b.iter(|| fusion.combine_all(black_box(&masses)).unwrap())
    });
}

fn bench_fold_64_experts_with_penalty(c: &mut Criterion) {
    let masses = make_masses(64);
    let fusion = DsFusionCore::default().with_penalty(ConflictPenalty::new(0.3).unwrap());
    c.bench_function("fold_64_experts_penalty_0.3", |b| {
        b.iter(|| fusion.combine_all(black_box(&masses)).unwrap())
    });
}

fn bench_discount_and_decide(c: &mut Criterion) {
    let m = MassFunction::new([(FaultType::BearingFault, 0.6), (FaultType::GearDamage, 0.2)]).unwrap();
    let rule = DecisionRule::default();
    c.bench_function("discount_and_decide", |b| {
        b.iter(|| {
            let d = EvidenceDiscounter::discount(black_box(&m), 1.7).unwrap();
            rule.decide(&d, Vec::new(), &[])
        })
    });
}

criterion_group!(
    benches,
    bench_fold_3_experts,
    bench_fold_64_experts_with_penalty,
    bench_discount_and_decide
);
criterion_main!(benches);
