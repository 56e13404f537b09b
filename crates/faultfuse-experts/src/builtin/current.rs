use faultfuse_core::config::CurrentThresholds;
use faultfuse_core::{ExpertOpinion, FaultFuseResult, FaultType, MassFunction, SensorSnapshot};

use crate::support::{graded_evidence, normal_support, ramp};

pub const KEY_CURRENT_RMS: &str = "current_rms";
pub const KEY_RATED_CURRENT: &str = "rated_current";
pub const KEY_IMBALANCE: &str = "current_imbalance";
pub const KEY_SIDEBAND_DB: &str = "sideband_db";

/// Motor current signature evidence.
///
/// Phase imbalance (percent) and rotor-bar sidebands support an electrical
/// fault; sustained overload supports overheating. Needs either a load
/// ratio (`current_rms` with `rated_current`) or a phase imbalance.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentExpert {
    thresholds: CurrentThresholds,
}

impl CurrentExpert {
    pub fn new(thresholds: CurrentThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &CurrentThresholds {
        &self.thresholds
    }

    /// `Err(reason)` when the inputs are present but unusable.
    fn load_ratio(&self, snapshot: &SensorSnapshot) -> Result<Option<f64>, String> {
        let (Some(current), Some(rated)) = (
            snapshot.number(KEY_CURRENT_RMS),
            snapshot.number(KEY_RATED_CURRENT),
        ) else {
            return Ok(None);
        };
        if rated <= 0.0 {
            return Err(format!("rated current {rated} is not positive"));
        }
        let ratio = current / rated;
        if !(0.0..=self.thresholds.max_load_ratio_valid).contains(&ratio) {
            return Err(format!(
                "load ratio {ratio:.2} outside [0, {}]",
                self.thresholds.max_load_ratio_valid
            ));
        }
        Ok(Some(ratio))
    }

    pub fn evaluate(&self, snapshot: &SensorSnapshot) -> FaultFuseResult<ExpertOpinion> {
        let t = &self.thresholds;
        let load = match self.load_ratio(snapshot) {
            Ok(load) => load,
            Err(reason) => return Ok(ExpertOpinion::abstain(reason)),
        };
        let imbalance = snapshot.number(KEY_IMBALANCE);
        if load.is_none() && imbalance.is_none() {
            return Ok(ExpertOpinion::abstain("no motor current reading"));
        }
        if let Some(pct) = imbalance {
            if !(0.0..=100.0).contains(&pct) {
                return Ok(ExpertOpinion::abstain(format!(
                    "phase imbalance {pct:.1}% outside [0, 100]"
                )));
            }
        }

        let imbalance_score =
            imbalance.map_or(0.0, |pct| ramp(pct, t.imbalance_normal_max, t.imbalance_fault));
        let sideband_score = snapshot
            .number(KEY_SIDEBAND_DB)
            .map_or(0.0, |db| ramp(db, t.sideband_fault_db - 10.0, t.sideband_fault_db));
        let electrical = imbalance_score.max(sideband_score);
        let overload = load.map_or(0.0, |ratio| ramp(ratio, 1.0, t.overload_ratio));

        if electrical == 0.0 && overload == 0.0 {
            let support = normal_support(
                imbalance.unwrap_or(0.0),
                t.imbalance_normal_max,
                t.max_support,
            );
            return Ok(ExpertOpinion::Evidence(MassFunction::simple_support(
                FaultType::Normal,
                support,
            )?));
        }

        graded_evidence(
            &[
                (FaultType::ElectricalFault, electrical),
                (FaultType::Overheating, overload),
            ],
            t.max_support,
        )
    }
}

impl Default for CurrentExpert {
    fn default() -> Self {
        Self::new(CurrentThresholds::default())
    }
}
