//! # faultfuse-fusion
//!
//! Evidence fusion for multi-expert fault diagnosis:
//! reliability discounting, conjunctive Dempster combination over all experts
//! with a tunable conflict penalty, and the decision rule
//! that turns the fused mass function into a diagnosis.

pub mod conflict;
pub mod decision;
pub mod dempster;
pub mod discount;
pub mod engine;
pub mod evidence;

pub use conflict::ConflictPenalty;
pub use decision::{DecisionRule, SeverityBands, SeverityTable};
pub use dempster::PairwiseCombination;
pub use discount::EvidenceDiscounter;
pub use engine::{DsFusionCore, FusionOutcome};
pub use evidence::ExpertEvidence;
