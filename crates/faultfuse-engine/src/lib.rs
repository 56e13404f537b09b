//! # faultfuse-engine
//!
//! The diagnosis engine: collects evidence from every registered expert,
//! discounts it by reliability, fuses it, decides, and records the result in
//! a bounded history.
//!
//! ```
//! use faultfuse_core::{FaultFuseConfig, FaultType, SensorSnapshot};
//! use faultfuse_engine::FusionDiagnosisEngine;
//!
//! let engine = FusionDiagnosisEngine::new(FaultFuseConfig::default()).unwrap();
//! let snapshot = SensorSnapshot::new()
//!     .with_reading("vibration_rms", 8.0)
//!     .with_reading("vibration_kurtosis", 7.5)
//!     .with_reading("temperature", 55.0);
//! let report = engine.diagnose(snapshot).unwrap();
//! assert_eq!(report.result.fault_type, FaultType::BearingFault);
//! ```

pub mod engine;
pub mod history;
pub mod tracing_setup;
pub mod views;

pub use engine::FusionDiagnosisEngine;
pub use history::DiagnosisHistoryStore;
pub use views::{EngineConfigView, ExpertListing, ExpertSummary, FaultTypeCatalog};
