//! Data models exchanged between the engine, its experts, and callers.

mod diagnosis;
mod history;
mod sensor;

pub use diagnosis::{aggregate_conflict, DiagnosisResult, ExpertContribution};
pub use history::{DiagnosisReport, HistoryEntry, HistoryPage};
pub use sensor::{SensorSnapshot, SensorValue};
