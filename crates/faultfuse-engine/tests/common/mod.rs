#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use faultfuse_core::config::ExpertsConfig;
use faultfuse_core::{
    Expert, ExpertOpinion, FaultFuseConfig, FaultFuseError, FaultFuseResult, FaultType,
    HistoryEntry, HistorySink, MassFunction, SensorSnapshot,
};
use faultfuse_engine::FusionDiagnosisEngine;

/// Always reports the same mass function.
pub struct FixedExpert {
    pub name: String,
    pub mass: MassFunction,
}

impl Expert for FixedExpert {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, _snapshot: &SensorSnapshot) -> FaultFuseResult<ExpertOpinion> {
        Ok(ExpertOpinion::Evidence(self.mass.clone()))
    }
}

pub fn fixed(name: &str, h: FaultType, support: f64) -> Arc<dyn Expert> {
    Arc::new(FixedExpert {
        name: name.to_string(),
        mass: MassFunction::simple_support(h, support).unwrap(),
    })
}

/// Engine with no experts registered.
pub fn empty_engine() -> FusionDiagnosisEngine {
    let config = FaultFuseConfig {
        experts: ExpertsConfig {
            enabled: Vec::new(),
            ..ExpertsConfig::default()
        },
        ..FaultFuseConfig::default()
    };
    FusionDiagnosisEngine::new(config).unwrap()
}

#[derive(Default)]
pub struct RecordingSink {
    pub ids: Mutex<Vec<String>>,
}

impl HistorySink for RecordingSink {
    fn persist(&self, entry: &HistoryEntry) -> FaultFuseResult<()> {
        self.ids.lock().unwrap().push(entry.id.clone());
        Ok(())
    }
}

pub struct FailingSink;

impl HistorySink for FailingSink {
    fn persist(&self, _entry: &HistoryEntry) -> FaultFuseResult<()> {
        Err(FaultFuseError::SinkError("disk full".into()))
    }
}
