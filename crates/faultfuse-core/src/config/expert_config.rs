//! Built-in expert selection and per-channel threshold tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::RegistryError;

/// The closed set of built-in experts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinExpertKind {
    Vibration,
    Temperature,
    Current,
}

impl BuiltinExpertKind {
    pub const ALL: [BuiltinExpertKind; 3] = [
        BuiltinExpertKind::Vibration,
        BuiltinExpertKind::Temperature,
        BuiltinExpertKind::Current,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Vibration => "vibration",
            Self::Temperature => "temperature",
            Self::Current => "current",
        }
    }

    /// Registry name a built-in expert is registered under.
    pub fn expert_name(self) -> &'static str {
        match self {
            Self::Vibration => "vibration_expert",
            Self::Temperature => "temperature_expert",
            Self::Current => "current_expert",
        }
    }
}

impl fmt::Display for BuiltinExpertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BuiltinExpertKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vibration" | "vibration_expert" => Ok(Self::Vibration),
            "temperature" | "temperature_expert" => Ok(Self::Temperature),
            "current" | "current_expert" => Ok(Self::Current),
            _ => Err(RegistryError::UnknownExpertKind(s.to_string())),
        }
    }
}

/// Expert registry settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpertsConfig {
    /// Built-ins registered when the engine starts, in this order.
    pub enabled: Vec<BuiltinExpertKind>,
    /// Weight given to a built-in registered without an explicit weight. Default: 1.0.
    pub default_weight: f64,
    pub vibration: VibrationThresholds,
    pub temperature: TemperatureThresholds,
    pub current: CurrentThresholds,
}

impl Default for ExpertsConfig {
    fn default() -> Self {
        Self {
            enabled: BuiltinExpertKind::ALL.to_vec(),
            default_weight: defaults::DEFAULT_EXPERT_WEIGHT,
            vibration: VibrationThresholds::default(),
            temperature: TemperatureThresholds::default(),
            current: CurrentThresholds::default(),
        }
    }
}

/// Vibration channel thresholds. Velocities in mm/s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VibrationThresholds {
    pub rms_normal_max: f64,
    pub rms_alarm: f64,
    /// Readings above this are outside the sensor's range; the expert abstains.
    pub rms_max_valid: f64,
    pub kurtosis_normal_max: f64,
    pub kurtosis_bearing: f64,
    pub crest_bearing: f64,
    /// Share of spectral energy at 1x running speed marking imbalance.
    pub harmonic_1x_dominant: f64,
    /// Share of spectral energy at 2x running speed marking misalignment.
    pub harmonic_2x_dominant: f64,
    /// Most mass the expert commits to singletons.
    pub max_support: f64,
}

impl Default for VibrationThresholds {
    fn default() -> Self {
        Self {
            rms_normal_max: defaults::DEFAULT_VIBRATION_RMS_NORMAL_MAX,
            rms_alarm: defaults::DEFAULT_VIBRATION_RMS_ALARM,
            rms_max_valid: defaults::DEFAULT_VIBRATION_RMS_MAX_VALID,
            kurtosis_normal_max: defaults::DEFAULT_VIBRATION_KURTOSIS_NORMAL_MAX,
            kurtosis_bearing: defaults::DEFAULT_VIBRATION_KURTOSIS_BEARING,
            crest_bearing: defaults::DEFAULT_VIBRATION_CREST_BEARING,
            harmonic_1x_dominant: defaults::DEFAULT_VIBRATION_1X_DOMINANT,
            harmonic_2x_dominant: defaults::DEFAULT_VIBRATION_2X_DOMINANT,
            max_support: defaults::DEFAULT_MAX_SUPPORT,
        }
    }
}

/// Temperature channel thresholds. Degrees Celsius, rates in °C/min.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureThresholds {
    /// Ambient assumed when the snapshot carries none.
    pub default_ambient: f64,
    pub rise_normal_max: f64,
    pub rise_overheat: f64,
    pub rate_lubrication: f64,
    pub min_valid: f64,
    pub max_valid: f64,
    pub max_support: f64,
}

impl Default for TemperatureThresholds {
    fn default() -> Self {
        Self {
            default_ambient: defaults::DEFAULT_AMBIENT_TEMPERATURE,
            rise_normal_max: defaults::DEFAULT_TEMPERATURE_RISE_NORMAL_MAX,
            rise_overheat: defaults::DEFAULT_TEMPERATURE_RISE_OVERHEAT,
            rate_lubrication: defaults::DEFAULT_TEMPERATURE_RATE_LUBRICATION,
            min_valid: defaults::DEFAULT_TEMPERATURE_MIN_VALID,
            max_valid: defaults::DEFAULT_TEMPERATURE_MAX_VALID,
            max_support: defaults::DEFAULT_MAX_SUPPORT,
        }
    }
}

/// Motor current thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentThresholds {
    /// Phase imbalance in percent.
    pub imbalance_normal_max: f64,
    pub imbalance_fault: f64,
    /// Load ratio (measured / rated current) above which the motor is overloaded.
    pub overload_ratio: f64,
    pub max_load_ratio_valid: f64,
    /// Rotor-bar sideband level in dB relative to the supply component.
    pub sideband_fault_db: f64,
    pub max_support: f64,
}

impl Default for CurrentThresholds {
    fn default() -> Self {
        Self {
            imbalance_normal_max: defaults::DEFAULT_CURRENT_IMBALANCE_NORMAL_MAX,
            imbalance_fault: defaults::DEFAULT_CURRENT_IMBALANCE_FAULT,
            overload_ratio: defaults::DEFAULT_CURRENT_OVERLOAD_RATIO,
            max_load_ratio_valid: defaults::DEFAULT_CURRENT_MAX_LOAD_RATIO_VALID,
            sideband_fault_db: defaults::DEFAULT_CURRENT_SIDEBAND_FAULT_DB,
            max_support: defaults::DEFAULT_MAX_SUPPORT,
        }
    }
}
