use faultfuse_core::config::TemperatureThresholds;
use faultfuse_core::{ExpertOpinion, FaultFuseResult, FaultType, MassFunction, SensorSnapshot};

use crate::support::{graded_evidence, normal_support, ramp};

pub const KEY_TEMPERATURE: &str = "temperature";
pub const KEY_AMBIENT: &str = "ambient_temperature";
pub const KEY_RATE: &str = "temperature_rate";

/// Thermal evidence from a component temperature, optionally with the
/// ambient temperature and the rate of rise.
///
/// Rise above ambient supports overheating; a fast rate of rise supports
/// lubrication failure.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureExpert {
    thresholds: TemperatureThresholds,
}

impl TemperatureExpert {
    pub fn new(thresholds: TemperatureThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &TemperatureThresholds {
        &self.thresholds
    }

    fn in_range(&self, celsius: f64) -> bool {
        (self.thresholds.min_valid..=self.thresholds.max_valid).contains(&celsius)
    }

    pub fn evaluate(&self, snapshot: &SensorSnapshot) -> FaultFuseResult<ExpertOpinion> {
        let t = &self.thresholds;
        let Some(temperature) = snapshot.number(KEY_TEMPERATURE) else {
            return Ok(ExpertOpinion::abstain("no temperature reading"));
        };
        if !self.in_range(temperature) {
            return Ok(ExpertOpinion::abstain(format!(
                "temperature {temperature:.1} outside [{}, {}]",
                t.min_valid, t.max_valid
            )));
        }

        // An implausible ambient reading falls back to the configured one.
        let ambient = snapshot
            .number(KEY_AMBIENT)
            .filter(|a| self.in_range(*a))
            .unwrap_or(t.default_ambient);
        let rise = temperature - ambient;
        let rate = snapshot.number(KEY_RATE).unwrap_or(0.0);

        if rise <= t.rise_normal_max && rate < t.rate_lubrication {
            let support = normal_support(rise.max(0.0), t.rise_normal_max, t.max_support);
            return Ok(ExpertOpinion::Evidence(MassFunction::simple_support(
                FaultType::Normal,
                support,
            )?));
        }

        let overheating = ramp(rise, t.rise_normal_max, t.rise_overheat);
        let lubrication = ramp(rate, 0.5 * t.rate_lubrication, 1.5 * t.rate_lubrication);

        graded_evidence(
            &[
                (FaultType::Overheating, overheating),
                (FaultType::LubricationFailure, lubrication),
            ],
            t.max_support,
        )
    }
}

impl Default for TemperatureExpert {
    fn default() -> Self {
        Self::new(TemperatureThresholds::default())
    }
}
