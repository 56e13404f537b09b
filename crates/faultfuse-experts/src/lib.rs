//! # faultfuse-experts
//!
//! Evidence sources for the diagnosis engine. Three channel experts ship
//! built in (vibration, temperature, motor current) as a closed enum; any
//! other source plugs in through the [`Expert`](faultfuse_core::Expert) trait.
//! The [`ExpertRegistry`] owns membership and reliability weights.

pub mod builtin;
pub mod features;
pub mod registry;
mod support;

pub use builtin::{BuiltinExpert, CurrentExpert, TemperatureExpert, VibrationExpert};
pub use features::WaveformFeatures;
pub use registry::{ExpertEvaluation, ExpertHandle, ExpertRegistry, RegisteredExpert};
