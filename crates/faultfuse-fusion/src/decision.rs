//! Decision rule: fused mass function → diagnosis.
//!
//! The diagnosed fault is the singleton with the highest fused mass, ties
//! broken by frame order. Confidence is that mass. Severity comes from a
//! per-fault confidence band table; `Normal` is always low severity and an
//! undiagnosable result has severity `Unknown`.

use std::collections::BTreeMap;

use faultfuse_core::models::aggregate_conflict;
use faultfuse_core::{DiagnosisResult, ExpertContribution, FaultType, MassFunction, Severity};

use crate::evidence::ExpertEvidence;

/// Confidence thresholds at which a fault escalates to each severity.
/// Below `medium` the severity is low.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityBands {
    pub medium: f64,
    pub high: f64,
    pub critical: f64,
}

impl SeverityBands {
    pub const fn new(medium: f64, high: f64, critical: f64) -> Self {
        Self {
            medium,
            high,
            critical,
        }
    }

    pub fn classify(&self, confidence: f64) -> Severity {
        if confidence >= self.critical {
            Severity::Critical
        } else if confidence >= self.high {
            Severity::High
        } else if confidence >= self.medium {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

// Mechanical faults that degrade slowly.
const MECHANICAL: SeverityBands = SeverityBands::new(0.5, 0.75, 0.95);
// Faults that progress to failure quickly once present.
const PROGRESSIVE: SeverityBands = SeverityBands::new(0.4, 0.6, 0.85);
// Thermal and electrical faults: damage is immediate.
const ACUTE: SeverityBands = SeverityBands::new(0.3, 0.5, 0.75);

/// Severity bands per fault type.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityTable {
    bands: BTreeMap<FaultType, SeverityBands>,
}

impl SeverityTable {
    /// The built-in table.
    ///
    /// | fault                                           | medium | high | critical |
    /// |-------------------------------------------------|--------|------|----------|
    /// | imbalance, misalignment, looseness              | 0.50   | 0.75 | 0.95     |
    /// | bearing_fault, gear_damage, lubrication_failure | 0.40   | 0.60 | 0.85     |
    /// | overheating, electrical_fault                   | 0.30   | 0.50 | 0.75     |
    pub fn standard() -> Self {
        let bands = [
            (FaultType::Imbalance, MECHANICAL),
            (FaultType::Misalignment, MECHANICAL),
            (FaultType::Looseness, MECHANICAL),
            (FaultType::BearingFault, PROGRESSIVE),
            (FaultType::GearDamage, PROGRESSIVE),
            (FaultType::LubricationFailure, PROGRESSIVE),
            (FaultType::Overheating, ACUTE),
            (FaultType::ElectricalFault, ACUTE),
        ]
        .into_iter()
        .collect();
        Self { bands }
    }

    /// Replace the bands for one fault type. `Normal` and `Unknown` are
    /// fixed and ignore overrides.
    pub fn with_bands(mut self, fault: FaultType, bands: SeverityBands) -> Self {
        if fault.is_fault() {
            self.bands.insert(fault, bands);
        }
        self
    }

    pub fn bands(&self, fault: FaultType) -> Option<SeverityBands> {
        self.bands.get(&fault).copied()
    }

    pub fn severity(&self, fault: FaultType, confidence: f64) -> Severity {
        match fault {
            FaultType::Unknown => Severity::Unknown,
            FaultType::Normal => Severity::Low,
            _ => self
                .bands
                .get(&fault)
                .map_or(Severity::Low, |b| b.classify(confidence)),
        }
    }
}

impl Default for SeverityTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Turns a fused mass function into a [`DiagnosisResult`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionRule {
    table: SeverityTable,
}

impl DecisionRule {
    pub fn new(table: SeverityTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &SeverityTable {
        &self.table
    }

    /// Decide on a fused mass function.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultfuse_core::{FaultType, MassFunction, Severity};
    /// use faultfuse_fusion::DecisionRule;
    ///
    /// let fused = MassFunction::simple_support(FaultType::BearingFault, 0.88).unwrap();
    /// let result = DecisionRule::default().decide(&fused, vec![0.0], &[]);
    /// assert_eq!(result.fault_type, FaultType::BearingFault);
    /// assert_eq!(result.severity, Severity::Critical);
    /// ```
    pub fn decide(
        &self,
        fused: &MassFunction,
        conflict_trace: Vec<f64>,
        evidence: &[ExpertEvidence],
    ) -> DiagnosisResult {
        let Some((fault_type, confidence)) = fused.argmax() else {
            return DiagnosisResult::undiagnosable(
                conflict_trace,
                Self::breakdown(evidence, FaultType::Unknown),
            );
        };

        DiagnosisResult {
            fault_type,
            confidence,
            severity: self.table.severity(fault_type, confidence),
            conflict_mass: aggregate_conflict(&conflict_trace),
            conflict_trace,
            ignorance: fused.ignorance(),
            plausibility: fused.plausibility(fault_type),
            fused_masses: fused.singletons().collect(),
            per_expert_breakdown: Self::breakdown(evidence, fault_type),
            description: fault_type.description().to_string(),
            recommendations: fault_type
                .recommendations()
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }

    /// Per-expert contributions toward `decided`, in evidence order.
    pub fn breakdown(evidence: &[ExpertEvidence], decided: FaultType) -> Vec<ExpertContribution> {
        evidence
            .iter()
            .map(|e| {
                let (raw_mass, contributed_mass) = if decided.is_universal() {
                    (0.0, 0.0)
                } else {
                    (e.raw.mass(decided), e.discounted.mass(decided))
                };
                ExpertContribution {
                    expert: e.name.clone(),
                    weight: e.weight,
                    abstained: e.abstained,
                    asserted: e.raw.argmax().map(|(h, _)| h),
                    raw_mass,
                    contributed_mass,
                    ignorance: e.discounted.ignorance(),
                }
            })
            .collect()
    }
}
