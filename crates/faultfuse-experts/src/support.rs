//! Helpers shared by the built-in experts for turning graded scores into a
//! mass function.

use faultfuse_core::{ExpertOpinion, FaultFuseResult, FaultType, MassFunction};

/// Linear ramp: 0 at or below `lo`, 1 at or above `hi`.
pub(crate) fn ramp(x: f64, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return if x >= hi { 1.0 } else { 0.0 };
    }
    ((x - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Scale raw scores in [0, 1] into singleton masses whose total never
/// exceeds `max_support`. The remainder is ignorance.
///
/// When the scores add up to more than one they are normalized first, so
/// relative strength is kept. All-zero scores commit nothing.
pub(crate) fn graded_evidence(
    scores: &[(FaultType, f64)],
    max_support: f64,
) -> FaultFuseResult<ExpertOpinion> {
    let total: f64 = scores.iter().map(|(_, s)| s.max(0.0)).sum();
    let scale = if total > 1.0 { max_support / total } else { max_support };
    let mass = MassFunction::new(
        scores
            .iter()
            .filter(|(_, s)| *s > 0.0)
            .map(|(h, s)| (*h, s * scale)),
    )?;
    Ok(ExpertOpinion::Evidence(mass))
}

/// Support for `Normal` that fades from `max_support` to half of it as
/// `level` approaches `normal_max`.
pub(crate) fn normal_support(level: f64, normal_max: f64, max_support: f64) -> f64 {
    let fraction = if normal_max > 0.0 {
        (level / normal_max).clamp(0.0, 1.0)
    } else {
        1.0
    };
    max_support * (1.0 - 0.5 * fraction)
}
