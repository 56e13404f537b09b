use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::frame::{FaultType, Severity};

/// One expert's part in a diagnosis, in registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertContribution {
    pub expert: String,
    /// Registry weight at the time of the call.
    pub weight: f64,
    /// The expert returned total ignorance instead of evidence.
    pub abstained: bool,
    /// The singleton the expert's raw output favoured, if any.
    pub asserted: Option<FaultType>,
    /// Raw mass the expert placed on the final fault type.
    pub raw_mass: f64,
    /// Mass on the final fault type after reliability discounting.
    pub contributed_mass: f64,
    /// Ignorance after reliability discounting.
    pub ignorance: f64,
}

/// The outcome of one fusion. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub fault_type: FaultType,
    /// Fused mass of `fault_type`; 0 when the fault type is unknown.
    pub confidence: f64,
    pub severity: Severity,
    /// Aggregate conflict over all fold steps: `1 - Π(1 - K_i)`.
    pub conflict_mass: f64,
    /// Conflict K observed at each pairwise fold step.
    pub conflict_trace: Vec<f64>,
    /// Fused mass on Θ.
    pub ignorance: f64,
    /// Pl(fault_type) = m(fault_type) + m(Θ).
    pub plausibility: f64,
    /// Fused singleton masses.
    pub fused_masses: BTreeMap<FaultType, f64>,
    pub per_expert_breakdown: Vec<ExpertContribution>,
    pub description: String,
    pub recommendations: Vec<String>,
}

impl DiagnosisResult {
    /// Result for a call that produced no decision: no experts, no
    /// committed mass, or total conflict.
    pub fn undiagnosable(
        conflict_trace: Vec<f64>,
        per_expert_breakdown: Vec<ExpertContribution>,
    ) -> Self {
        let conflict_mass = aggregate_conflict(&conflict_trace);
        Self {
            fault_type: FaultType::Unknown,
            confidence: 0.0,
            severity: Severity::Unknown,
            conflict_mass,
            conflict_trace,
            ignorance: 1.0,
            plausibility: 1.0,
            fused_masses: BTreeMap::new(),
            per_expert_breakdown,
            description: FaultType::Unknown.description().to_string(),
            recommendations: owned(FaultType::Unknown.recommendations()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.fault_type.is_universal()
    }

    /// Names of experts that abstained.
    pub fn abstained_experts(&self) -> Vec<&str> {
        self.per_expert_breakdown
            .iter()
            .filter(|c| c.abstained)
            .map(|c| c.expert.as_str())
            .collect()
    }
}

/// `1 - Π(1 - K_i)` over every fold step.
pub fn aggregate_conflict(trace: &[f64]) -> f64 {
    let retained: f64 = trace.iter().map(|k| 1.0 - k.clamp(0.0, 1.0)).product();
    (1.0 - retained).clamp(0.0, 1.0)
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
