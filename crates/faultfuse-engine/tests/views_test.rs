use faultfuse_core::{FaultFuseConfig, FrameOfDiscernment};
use faultfuse_engine::FusionDiagnosisEngine;

#[test]
fn expert_listing_is_in_registration_order() {
    let engine = FusionDiagnosisEngine::new(FaultFuseConfig::default()).unwrap();
    engine.update_weight("current_expert", 0.3).unwrap();

    let listing = engine.list_experts().unwrap();
    assert_eq!(listing.count, 3);
    let names: Vec<&str> = listing.experts.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["vibration_expert", "temperature_expert", "current_expert"]);
    assert_eq!(listing.weights.len(), 3);
    assert_eq!(listing.weights["current_expert"], 0.3);
}

#[test]
fn fault_type_catalog_covers_the_frame() {
    let engine = FusionDiagnosisEngine::new(FaultFuseConfig::default()).unwrap();
    let catalog = engine.fault_types();

    assert_eq!(catalog.types.len(), FrameOfDiscernment::size() + 1);
    assert_eq!(catalog.types.first().map(String::as_str), Some("bearing_fault"));
    assert_eq!(catalog.types.last().map(String::as_str), Some("unknown"));
    assert_eq!(catalog.labels.len(), catalog.types.len());
    assert_eq!(catalog.severity_labels.len(), 5);
    assert_eq!(catalog.severity_labels["critical"], "Critical");
}

#[test]
fn config_view_reflects_live_state() {
    let engine = FusionDiagnosisEngine::new(FaultFuseConfig::default()).unwrap();
    engine.unregister_expert("vibration_expert").unwrap();
    engine.set_conflict_penalty(0.5).unwrap();

    let view = engine.config_view().unwrap();
    assert_eq!(view.expert_count, 2);
    assert_eq!(view.experts.len(), 2);
    assert_eq!(view.frame_of_discernment.len(), 9);
    assert_eq!(view.frame_of_discernment.last().map(String::as_str), Some("normal"));
    assert_eq!(view.fault_types.len(), 10);
    assert_eq!(view.conflict_penalty_factor, 0.5);
    assert_eq!(view.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn views_serialize_with_snake_case_fields() {
    let engine = FusionDiagnosisEngine::new(FaultFuseConfig::default()).unwrap();
    let json = serde_json::to_value(engine.config_view().unwrap()).unwrap();
    assert_eq!(json["expert_count"], 3);
    assert!(json["frame_of_discernment"].is_array());

    let json = serde_json::to_value(engine.list_experts().unwrap()).unwrap();
    assert_eq!(json["weights"]["vibration_expert"], 1.0);
}
