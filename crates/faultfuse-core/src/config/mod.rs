//! Configuration loaded from TOML. Every section defaults independently, so
//! an empty document is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use faultfuse_core::config::FaultFuseConfig;
//!
//! let config = FaultFuseConfig::from_toml("[history]\ncapacity = 50\n").unwrap();
//! assert_eq!(config.history.capacity, 50);
//! assert_eq!(config.fusion.conflict_penalty_factor, 0.0);
//! ```

pub mod defaults;
mod expert_config;
mod fusion_config;
mod history_config;
mod observability_config;

pub use expert_config::{
    BuiltinExpertKind, CurrentThresholds, ExpertsConfig, TemperatureThresholds,
    VibrationThresholds,
};
pub use fusion_config::FusionConfig;
pub use history_config::HistoryConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_EXPERT_WEIGHT, MAX_HISTORY_CAPACITY, MIN_EXPERT_WEIGHT};
use crate::errors::{FaultFuseError, FaultFuseResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultFuseConfig {
    pub fusion: FusionConfig,
    pub experts: ExpertsConfig,
    pub history: HistoryConfig,
    pub observability: ObservabilityConfig,
}

impl FaultFuseConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> FaultFuseResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> FaultFuseResult<String> {
        toml::to_string_pretty(self).map_err(|e| FaultFuseError::ConfigError(e.to_string()))
    }

    /// Reject values the engine cannot operate with.
    pub fn validate(&self) -> FaultFuseResult<()> {
        let fusion = &self.fusion;
        check_unit("fusion.conflict_penalty_factor", fusion.conflict_penalty_factor)?;
        check_unit("fusion.conflict_warning_threshold", fusion.conflict_warning_threshold)?;
        if !(fusion.total_conflict_epsilon > 0.0 && fusion.total_conflict_epsilon < 1.0) {
            return Err(config_err(format!(
                "fusion.total_conflict_epsilon must be within (0, 1), got {}",
                fusion.total_conflict_epsilon
            )));
        }
        if fusion.parallel_threshold == 0 {
            return Err(config_err("fusion.parallel_threshold must be at least 1"));
        }

        let experts = &self.experts;
        if !(MIN_EXPERT_WEIGHT..=MAX_EXPERT_WEIGHT).contains(&experts.default_weight) {
            return Err(config_err(format!(
                "experts.default_weight must be within [{MIN_EXPERT_WEIGHT}, {MAX_EXPERT_WEIGHT}], got {}",
                experts.default_weight
            )));
        }
        let mut seen = Vec::with_capacity(experts.enabled.len());
        for kind in &experts.enabled {
            if seen.contains(kind) {
                return Err(config_err(format!("experts.enabled lists {kind} twice")));
            }
            seen.push(*kind);
        }

        let v = &experts.vibration;
        check_ascending(
            "experts.vibration rms thresholds",
            &[v.rms_normal_max, v.rms_alarm, v.rms_max_valid],
        )?;
        check_ascending(
            "experts.vibration kurtosis thresholds",
            &[v.kurtosis_normal_max, v.kurtosis_bearing],
        )?;
        check_unit("experts.vibration.harmonic_1x_dominant", v.harmonic_1x_dominant)?;
        check_unit("experts.vibration.harmonic_2x_dominant", v.harmonic_2x_dominant)?;
        check_support("experts.vibration.max_support", v.max_support)?;

        let t = &experts.temperature;
        check_ascending("experts.temperature valid range", &[t.min_valid, t.max_valid])?;
        check_ascending(
            "experts.temperature rise thresholds",
            &[t.rise_normal_max, t.rise_overheat],
        )?;
        check_support("experts.temperature.max_support", t.max_support)?;

        let c = &experts.current;
        check_ascending(
            "experts.current imbalance thresholds",
            &[c.imbalance_normal_max, c.imbalance_fault],
        )?;
        check_ascending(
            "experts.current load thresholds",
            &[c.overload_ratio, c.max_load_ratio_valid],
        )?;
        check_support("experts.current.max_support", c.max_support)?;

        if self.history.capacity == 0 || self.history.capacity > MAX_HISTORY_CAPACITY {
            return Err(config_err(format!(
                "history.capacity must be within [1, {MAX_HISTORY_CAPACITY}], got {}",
                self.history.capacity
            )));
        }

        Ok(())
    }
}

fn config_err(msg: impl Into<String>) -> FaultFuseError {
    FaultFuseError::ConfigError(msg.into())
}

fn check_unit(field: &str, value: f64) -> FaultFuseResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(config_err(format!("{field} must be within [0, 1], got {value}")))
    }
}

fn check_support(field: &str, value: f64) -> FaultFuseResult<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(config_err(format!("{field} must be within (0, 1], got {value}")))
    }
}

fn check_ascending(what: &str, values: &[f64]) -> FaultFuseResult<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(config_err(format!("{what} must be finite")));
    }
    if values.windows(2).all(|w| w[0] < w[1]) {
        Ok(())
    } else {
        Err(config_err(format!("{what} must be strictly ascending: {values:?}")))
    }
}
