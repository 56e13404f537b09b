//! # faultfuse-core
//!
//! Foundation crate for the FaultFuse diagnosis engine.
//! Defines the frame of discernment, mass functions, models, traits,
//! errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod frame;
pub mod mass;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FaultFuseConfig;
pub use errors::{FaultFuseError, FaultFuseResult};
pub use frame::{FaultType, FrameOfDiscernment, Severity};
pub use mass::MassFunction;
pub use models::{DiagnosisResult, ExpertContribution, HistoryEntry, SensorSnapshot, SensorValue};
pub use traits::{Expert, ExpertOpinion, HistorySink};
