//! Transport-agnostic views returned by the engine's query operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use faultfuse_core::{FaultType, FrameOfDiscernment, Severity};
use faultfuse_experts::RegisteredExpert;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertSummary {
    pub name: String,
    pub kind: String,
    pub weight: f64,
}

impl From<&RegisteredExpert> for ExpertSummary {
    fn from(e: &RegisteredExpert) -> Self {
        Self {
            name: e.name.clone(),
            kind: e.kind.clone(),
            weight: e.weight,
        }
    }
}

/// Registered experts in registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertListing {
    pub count: usize,
    pub experts: Vec<ExpertSummary>,
    pub weights: BTreeMap<String, f64>,
}

impl ExpertListing {
    pub fn from_registered(registered: &[RegisteredExpert]) -> Self {
        let experts: Vec<ExpertSummary> = registered.iter().map(ExpertSummary::from).collect();
        Self {
            count: experts.len(),
            weights: experts.iter().map(|e| (e.name.clone(), e.weight)).collect(),
            experts,
        }
    }
}

/// Every hypothesis with its display label, plus severity labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultTypeCatalog {
    /// Hypothesis codes in frame order, `unknown` last.
    pub types: Vec<String>,
    pub labels: BTreeMap<String, String>,
    pub severity_labels: BTreeMap<String, String>,
}

impl FaultTypeCatalog {
    pub fn build() -> Self {
        Self {
            types: FrameOfDiscernment::codes()
                .into_iter()
                .map(str::to_string)
                .collect(),
            labels: FrameOfDiscernment::hypotheses()
                .map(|h: FaultType| (h.code().to_string(), h.label().to_string()))
                .collect(),
            severity_labels: Severity::ALL
                .iter()
                .map(|s| (s.code().to_string(), s.label().to_string()))
                .collect(),
        }
    }
}

/// Current engine configuration as seen by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfigView {
    pub version: String,
    /// Singleton hypothesis codes of Θ in tie-break order.
    pub frame_of_discernment: Vec<String>,
    pub expert_count: usize,
    pub experts: Vec<ExpertSummary>,
    /// Every hypothesis code including `unknown`.
    pub fault_types: Vec<String>,
    pub conflict_penalty_factor: f64,
}
