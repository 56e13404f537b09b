use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MassError;

/// A fault hypothesis. `Unknown` is the universal hypothesis Θ: mass placed
/// on it is mass the source could not commit to any specific fault.
///
/// The derived `Ord` follows declaration order, which matches
/// [`FrameOfDiscernment::SINGLETONS`](super::FrameOfDiscernment::SINGLETONS)
/// with `Unknown` last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FaultType {
    BearingFault,
    GearDamage,
    Imbalance,
    Misalignment,
    Looseness,
    Overheating,
    LubricationFailure,
    ElectricalFault,
    Normal,
    Unknown,
}

impl FaultType {
    /// Stable wire code.
    pub fn code(self) -> &'static str {
        match self {
            Self::BearingFault => "bearing_fault",
            Self::GearDamage => "gear_damage",
            Self::Imbalance => "imbalance",
            Self::Misalignment => "misalignment",
            Self::Looseness => "looseness",
            Self::Overheating => "overheating",
            Self::LubricationFailure => "lubrication_failure",
            Self::ElectricalFault => "electrical_fault",
            Self::Normal => "normal",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label for dashboards and reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::BearingFault => "Bearing fault",
            Self::GearDamage => "Gear damage",
            Self::Imbalance => "Rotor imbalance",
            Self::Misalignment => "Shaft misalignment",
            Self::Looseness => "Mechanical looseness",
            Self::Overheating => "Overheating",
            Self::LubricationFailure => "Lubrication failure",
            Self::ElectricalFault => "Electrical fault",
            Self::Normal => "Normal operation",
            Self::Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "bearing_fault" => Some(Self::BearingFault),
            "gear_damage" => Some(Self::GearDamage),
            "imbalance" => Some(Self::Imbalance),
            "misalignment" => Some(Self::Misalignment),
            "looseness" => Some(Self::Looseness),
            "overheating" => Some(Self::Overheating),
            "lubrication_failure" => Some(Self::LubricationFailure),
            "electrical_fault" => Some(Self::ElectricalFault),
            "normal" => Some(Self::Normal),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Whether this is the universal hypothesis Θ.
    pub fn is_universal(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Whether this hypothesis names an actual fault (not normality, not ignorance).
    pub fn is_fault(self) -> bool {
        !matches!(self, Self::Normal | Self::Unknown)
    }

    /// One-line description attached to a diagnosis.
    pub fn description(self) -> &'static str {
        match self {
            Self::BearingFault => "Rolling-element bearing defect indicated by impulsive vibration",
            Self::GearDamage => "Gear tooth wear or breakage indicated by load and mesh signatures",
            Self::Imbalance => "Mass imbalance on the rotor producing dominant 1x vibration",
            Self::Misalignment => "Coupling or shaft misalignment producing elevated 2x vibration",
            Self::Looseness => "Structural or mounting looseness producing broadband vibration",
            Self::Overheating => "Temperature rise beyond the component's thermal limit",
            Self::LubricationFailure => "Insufficient or degraded lubrication causing rapid heating",
            Self::ElectricalFault => "Winding, supply, or rotor-bar fault visible in motor current",
            Self::Normal => "All evaluated channels are within normal operating limits",
            Self::Unknown => "Evidence is insufficient or too conflicting to name a fault",
        }
    }

    /// Maintenance recommendations attached to a diagnosis.
    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::BearingFault => &[
                "Inspect bearing races and rolling elements",
                "Run envelope analysis to confirm the defect frequency",
                "Plan bearing replacement at the next stop",
            ],
            Self::GearDamage => &[
                "Inspect gear teeth for pitting or breakage",
                "Check gearbox oil for metal particles",
            ],
            Self::Imbalance => &[
                "Perform field balancing of the rotor",
                "Check for material build-up on the impeller or fan",
            ],
            Self::Misalignment => &[
                "Verify shaft alignment with a laser alignment tool",
                "Inspect the coupling for wear",
            ],
            Self::Looseness => &[
                "Check foundation and mounting bolt torque",
                "Inspect the baseplate for cracks",
            ],
            Self::Overheating => &[
                "Reduce load and verify cooling airflow",
                "Check ambient conditions and ventilation",
            ],
            Self::LubricationFailure => &[
                "Re-lubricate according to the maintenance schedule",
                "Sample the lubricant for contamination",
            ],
            Self::ElectricalFault => &[
                "Measure phase currents and supply voltage balance",
                "Run insulation resistance and rotor-bar tests",
            ],
            Self::Normal => &["Continue routine monitoring"],
            Self::Unknown => &[
                "Collect additional measurements",
                "Review sensor health and expert weights",
            ],
        }
    }
}

impl fmt::Display for FaultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FaultType {
    type Err = MassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| MassError::UnknownHypothesis {
            code: s.to_string(),
        })
    }
}
