use faultfuse_core::config::VibrationThresholds;
use faultfuse_core::{ExpertOpinion, FaultFuseResult, FaultType, MassFunction, SensorSnapshot};

use crate::features::WaveformFeatures;
use crate::support::{graded_evidence, normal_support, ramp};

pub const KEY_RMS: &str = "vibration_rms";
pub const KEY_KURTOSIS: &str = "vibration_kurtosis";
pub const KEY_CREST_FACTOR: &str = "vibration_crest_factor";
pub const KEY_WAVEFORM: &str = "vibration_waveform";
pub const KEY_1X_RATIO: &str = "vibration_1x_ratio";
pub const KEY_2X_RATIO: &str = "vibration_2x_ratio";

/// Mechanical fault evidence from casing vibration.
///
/// Needs an RMS velocity, either as `vibration_rms` or computed from a
/// `vibration_waveform` window. Kurtosis and crest factor point at bearing
/// defects; the 1x and 2x harmonic ratios point at imbalance and
/// misalignment. Elevated RMS with no specific signature is read as
/// looseness.
#[derive(Debug, Clone, PartialEq)]
pub struct VibrationExpert {
    thresholds: VibrationThresholds,
}

struct Reading {
    rms: f64,
    kurtosis: Option<f64>,
    crest_factor: Option<f64>,
}

impl VibrationExpert {
    pub fn new(thresholds: VibrationThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &VibrationThresholds {
        &self.thresholds
    }

    /// Precomputed features win over the waveform.
    fn read(snapshot: &SensorSnapshot) -> Option<Reading> {
        let waveform = snapshot.series(KEY_WAVEFORM).and_then(WaveformFeatures::extract);
        let rms = snapshot.number(KEY_RMS).or(waveform.map(|f| f.rms))?;
        Some(Reading {
            rms,
            kurtosis: snapshot
                .number(KEY_KURTOSIS)
                .or(waveform.map(|f| f.kurtosis)),
            crest_factor: snapshot
                .number(KEY_CREST_FACTOR)
                .or(waveform.map(|f| f.crest_factor)),
        })
    }

    pub fn evaluate(&self, snapshot: &SensorSnapshot) -> FaultFuseResult<ExpertOpinion> {
        let t = &self.thresholds;
        let Some(reading) = Self::read(snapshot) else {
            return Ok(ExpertOpinion::abstain("no vibration reading"));
        };
        if reading.rms < 0.0 || reading.rms > t.rms_max_valid {
            return Ok(ExpertOpinion::abstain(format!(
                "vibration rms {:.3} outside [0, {}]",
                reading.rms, t.rms_max_valid
            )));
        }

        let kurtosis = reading.kurtosis.unwrap_or(0.0);
        let crest = reading.crest_factor.unwrap_or(0.0);
        let impulsive = kurtosis > t.kurtosis_normal_max || crest >= t.crest_bearing;

        if reading.rms <= t.rms_normal_max && !impulsive {
            let support = normal_support(reading.rms, t.rms_normal_max, t.max_support);
            return Ok(ExpertOpinion::Evidence(MassFunction::simple_support(
                FaultType::Normal,
                support,
            )?));
        }

        let amplitude = ramp(reading.rms, t.rms_normal_max, t.rms_alarm);
        let gain = 0.5 + 0.5 * amplitude;

        let mut bearing = ramp(kurtosis, t.kurtosis_normal_max, t.kurtosis_bearing);
        if crest >= t.crest_bearing {
            bearing = bearing.max(0.5);
        }
        let imbalance = snapshot
            .number(KEY_1X_RATIO)
            .map_or(0.0, |r| ramp(r, 0.5 * t.harmonic_1x_dominant, t.harmonic_1x_dominant));
        let misalignment = snapshot
            .number(KEY_2X_RATIO)
            .map_or(0.0, |r| ramp(r, 0.5 * t.harmonic_2x_dominant, t.harmonic_2x_dominant));
        let looseness = if bearing + imbalance + misalignment > 0.0 {
            0.0
        } else {
            amplitude
        };

        graded_evidence(
            &[
                (FaultType::BearingFault, bearing * gain),
                (FaultType::Imbalance, imbalance * gain),
                (FaultType::Misalignment, misalignment * gain),
                (FaultType::Looseness, looseness),
            ],
            t.max_support,
        )
    }
}

impl Default for VibrationExpert {
    fn default() -> Self {
        Self::new(VibrationThresholds::default())
    }
}
