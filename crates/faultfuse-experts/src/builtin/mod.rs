//! The closed set of built-in experts.

pub mod current;
pub mod temperature;
pub mod vibration;

pub use current::CurrentExpert;
pub use temperature::TemperatureExpert;
pub use vibration::VibrationExpert;

use faultfuse_core::config::{BuiltinExpertKind, ExpertsConfig};
use faultfuse_core::{Expert, ExpertOpinion, FaultFuseResult, SensorSnapshot};

/// A built-in expert configured from its threshold table.
#[derive(Debug, Clone, PartialEq)]
pub enum BuiltinExpert {
    Vibration(VibrationExpert),
    Temperature(TemperatureExpert),
    Current(CurrentExpert),
}

impl BuiltinExpert {
    pub fn from_kind(kind: BuiltinExpertKind, config: &ExpertsConfig) -> Self {
        match kind {
            BuiltinExpertKind::Vibration => {
                Self::Vibration(VibrationExpert::new(config.vibration.clone()))
            }
            BuiltinExpertKind::Temperature => {
                Self::Temperature(TemperatureExpert::new(config.temperature.clone()))
            }
            BuiltinExpertKind::Current => Self::Current(CurrentExpert::new(config.current.clone())),
        }
    }

    pub fn builtin_kind(&self) -> BuiltinExpertKind {
        match self {
            Self::Vibration(_) => BuiltinExpertKind::Vibration,
            Self::Temperature(_) => BuiltinExpertKind::Temperature,
            Self::Current(_) => BuiltinExpertKind::Current,
        }
    }
}

impl Expert for BuiltinExpert {
    fn name(&self) -> &str {
        self.builtin_kind().expert_name()
    }

    fn kind(&self) -> &str {
        self.builtin_kind().code()
    }

    fn evaluate(&self, snapshot: &SensorSnapshot) -> FaultFuseResult<ExpertOpinion> {
        match self {
            Self::Vibration(e) => e.evaluate(snapshot),
            Self::Temperature(e) => e.evaluate(snapshot),
            Self::Current(e) => e.evaluate(snapshot),
        }
    }
}
