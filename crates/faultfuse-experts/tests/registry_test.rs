use std::sync::Arc;

use faultfuse_core::config::{BuiltinExpertKind, ExpertsConfig};
use faultfuse_core::errors::{MassError, RegistryError};
use faultfuse_core::{
    Expert, ExpertOpinion, FaultFuseError, FaultFuseResult, FaultType, MassFunction, SensorSnapshot,
};
use faultfuse_experts::{ExpertHandle, ExpertRegistry};

struct FixedExpert {
    name: &'static str,
    mass: MassFunction,
}

impl Expert for FixedExpert {
    fn name(&self) -> &str {
        self.name
    }

    fn evaluate(&self, _snapshot: &SensorSnapshot) -> FaultFuseResult<ExpertOpinion> {
        Ok(ExpertOpinion::Evidence(self.mass.clone()))
    }
}

struct BrokenExpert;

impl Expert for BrokenExpert {
    fn name(&self) -> &str {
        "broken"
    }

    fn evaluate(&self, _snapshot: &SensorSnapshot) -> FaultFuseResult<ExpertOpinion> {
        Err(FaultFuseError::ConfigError("calibration table missing".into()))
    }
}

struct OverflowingExpert;

impl Expert for OverflowingExpert {
    fn name(&self) -> &str {
        "overflowing"
    }

    fn evaluate(&self, _snapshot: &SensorSnapshot) -> FaultFuseResult<ExpertOpinion> {
        let mass = MassFunction::new([(FaultType::Imbalance, 0.8), (FaultType::Looseness, 0.7)])?;
        Ok(ExpertOpinion::Evidence(mass))
    }
}

fn fixed(name: &'static str, h: FaultType, s: f64) -> Arc<dyn Expert> {
    Arc::new(FixedExpert {
        name,
        mass: MassFunction::simple_support(h, s).unwrap(),
    })
}

#[test]
fn builtins_register_in_configured_order() {
    let registry = ExpertRegistry::with_builtins(&ExpertsConfig::default()).unwrap();
    assert_eq!(
        registry.names(),
        vec!["vibration_expert", "temperature_expert", "current_expert"]
    );
    assert!(registry.list_all().iter().all(|e| e.weight == 1.0));
    assert!(registry.list_all().iter().all(|e| e.handle.is_builtin()));
    assert_eq!(registry.get("current_expert").unwrap().kind, "current");
}

#[test]
fn duplicate_names_are_rejected() {
    let mut registry = ExpertRegistry::new();
    let config = ExpertsConfig::default();
    registry
        .register_builtin(BuiltinExpertKind::Vibration, None, &config)
        .unwrap();
    let err = registry
        .register_builtin(BuiltinExpertKind::Vibration, Some(2.0), &config)
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateExpertName("vibration_expert".into()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn registration_weight_is_validated() {
    let mut registry = ExpertRegistry::new();
    for bad in [-0.1, 5.01, f64::NAN] {
        let err = registry
            .register_custom(fixed("acoustic", FaultType::GearDamage, 0.5), bad)
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidWeight { .. }));
    }
    assert!(registry.is_empty());
    registry
        .register_custom(fixed("acoustic", FaultType::GearDamage, 0.5), 5.0)
        .unwrap();
    assert_eq!(registry.get("acoustic").unwrap().kind, "custom");
}

#[test]
fn unregister_reports_whether_anything_was_removed() {
    let mut registry = ExpertRegistry::with_builtins(&ExpertsConfig::default()).unwrap();
    assert!(registry.unregister("temperature_expert"));
    assert!(!registry.unregister("temperature_expert"));
    assert_eq!(registry.names(), vec!["vibration_expert", "current_expert"]);
}

#[test]
fn update_weight_checks_name_then_range() {
    let mut registry = ExpertRegistry::with_builtins(&ExpertsConfig::default()).unwrap();
    let previous = registry.update_weight("vibration_expert", 2.5).unwrap();
    assert_eq!(previous, 1.0);
    assert_eq!(registry.weights()["vibration_expert"], 2.5);

    assert_eq!(
        registry.update_weight("ghost", 1.0).unwrap_err(),
        RegistryError::ExpertNotFound("ghost".into())
    );
    assert!(matches!(
        registry.update_weight("vibration_expert", 7.0).unwrap_err(),
        RegistryError::InvalidWeight { .. }
    ));
    assert_eq!(registry.weights()["vibration_expert"], 2.5);
}

#[test]
fn evaluation_follows_registration_order() {
    let mut registry = ExpertRegistry::new();
    registry
        .register_custom(fixed("b", FaultType::Imbalance, 0.3), 1.0)
        .unwrap();
    registry
        .register_custom(fixed("a", FaultType::Looseness, 0.6), 0.5)
        .unwrap();

    for parallel in [false, true] {
        let out = registry.evaluate_all(&SensorSnapshot::new(), parallel).unwrap();
        let names: Vec<&str> = out.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(out[1].weight, 0.5);
    }
}

#[test]
fn builtin_experts_abstain_on_an_empty_snapshot() {
    let registry = ExpertRegistry::with_builtins(&ExpertsConfig::default()).unwrap();
    let out = registry.evaluate_all(&SensorSnapshot::new(), false).unwrap();
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|e| e.opinion.is_abstain()));
}

#[test]
fn expert_errors_fail_the_evaluation() {
    let mut registry = ExpertRegistry::new();
    registry.register_custom(Arc::new(BrokenExpert), 1.0).unwrap();
    let err = registry.evaluate_all(&SensorSnapshot::new(), false).unwrap_err();
    match err {
        FaultFuseError::ExpertFailed { expert, reason } => {
            assert_eq!(expert, "broken");
            assert!(reason.contains("calibration table missing"));
        }
        other => panic!("expected ExpertFailed, got {other:?}"),
    }
}

#[test]
fn malformed_mass_keeps_its_error_kind() {
    let mut registry = ExpertRegistry::new();
    registry.register_custom(Arc::new(OverflowingExpert), 1.0).unwrap();
    let err = registry.evaluate_all(&SensorSnapshot::new(), true).unwrap_err();
    assert!(matches!(
        err,
        FaultFuseError::InvalidMassFunction(MassError::SingletonOverflow { .. })
    ));
}

#[test]
fn custom_handles_delegate_to_the_expert() {
    let handle = ExpertHandle::Custom(fixed("acoustic", FaultType::GearDamage, 0.4));
    assert_eq!(handle.name(), "acoustic");
    assert_eq!(handle.kind(), "custom");
    assert!(!handle.is_builtin());
    let opinion = handle.evaluate(&SensorSnapshot::new()).unwrap();
    assert!((opinion.mass().mass(FaultType::GearDamage) - 0.4).abs() < 1e-12);
    assert!(format!("{handle:?}").contains("acoustic"));
}
