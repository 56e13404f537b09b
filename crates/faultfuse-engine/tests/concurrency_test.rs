mod common;

use std::sync::Arc;
use std::thread;

use common::{empty_engine, fixed};
use faultfuse_core::config::{ExpertsConfig, HistoryConfig};
use faultfuse_core::{FaultFuseConfig, FaultType, SensorSnapshot};
use faultfuse_engine::FusionDiagnosisEngine;

#[test]
fn diagnoses_run_while_weights_and_penalty_change() {
    let engine = Arc::new(empty_engine());
    engine.register_expert(fixed("a", FaultType::BearingFault, 0.7), 1.0).unwrap();
    engine.register_expert(fixed("b", FaultType::GearDamage, 0.5), 1.0).unwrap();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let engine = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                let result = engine.diagnose(SensorSnapshot::new()).unwrap().result;
                let total: f64 = result.fused_masses.values().sum::<f64>() + result.ignorance;
                assert!((total - 1.0).abs() < 1e-6);
                assert!(!result.is_unknown());
            }
        }));
    }
    {
        let engine = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                let w = (i % 6) as f64;
                engine.update_weight("b", w.min(5.0)).unwrap();
                engine.set_conflict_penalty((i % 11) as f64 / 10.0).unwrap();
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(engine.history(usize::MAX, 0).unwrap().total, 200);
}

#[test]
fn concurrent_appends_never_exceed_capacity() {
    let config = FaultFuseConfig {
        experts: ExpertsConfig {
            enabled: Vec::new(),
            ..ExpertsConfig::default()
        },
        history: HistoryConfig { capacity: 25 },
        ..FaultFuseConfig::default()
    };
    let engine = Arc::new(FusionDiagnosisEngine::new(config).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..20 {
                    engine.diagnose(SensorSnapshot::new()).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(engine.history(usize::MAX, 0).unwrap().total, 25);
}

#[test]
fn registry_changes_from_many_threads_stay_consistent() {
    let engine = Arc::new(empty_engine());
    let handles: Vec<_> = (0..6)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let name = format!("expert-{i}");
                engine
                    .register_expert(fixed(&name, FaultType::Looseness, 0.3), 1.0)
                    .unwrap();
                if i % 2 == 0 {
                    assert!(engine.unregister_expert(&name).unwrap());
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let listing = engine.list_experts().unwrap();
    assert_eq!(listing.count, 3);
    assert!(listing.experts.iter().all(|e| e.name.ends_with(['1', '3', '5'])));
}
