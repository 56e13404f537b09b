//! DsFusionCore — folds discounted expert evidence into one mass function.

use tracing::debug;

use faultfuse_core::config::{defaults, FusionConfig};
use faultfuse_core::errors::FusionError;
use faultfuse_core::models::aggregate_conflict;
use faultfuse_core::{FaultFuseError, FaultFuseResult, MassFunction};

use crate::conflict::ConflictPenalty;
use crate::dempster::{self, Conjunction, PairwiseCombination};

/// The fused mass function and the conflict seen at each fold step.
#[derive(Debug, Clone, PartialEq)]
pub struct FusionOutcome {
    pub fused: MassFunction,
    /// K of every combination step, in input order. Empty for zero or one input.
    pub conflict_trace: Vec<f64>,
}

impl FusionOutcome {
    /// `1 - Π(1 - K_i)` over the trace.
    pub fn conflict_mass(&self) -> f64 {
        aggregate_conflict(&self.conflict_trace)
    }
}

/// Dempster-Shafer combination with a fixed conflict policy.
///
/// The core is a value: the engine builds one per diagnosis from the
/// penalty in effect when the call started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DsFusionCore {
    penalty: ConflictPenalty,
    epsilon: f64,
    warning_threshold: f64,
}

impl DsFusionCore {
    pub fn new(penalty: ConflictPenalty, epsilon: f64, warning_threshold: f64) -> Self {
        Self {
            penalty,
            epsilon,
            warning_threshold,
        }
    }

    /// Build from config, validating the configured penalty factor.
    pub fn from_config(config: &FusionConfig) -> FaultFuseResult<Self> {
        let penalty = ConflictPenalty::new(config.conflict_penalty_factor)?;
        Ok(Self::new(
            penalty,
            config.total_conflict_epsilon,
            config.conflict_warning_threshold,
        ))
    }

    /// The same thresholds with a different penalty.
    pub fn with_penalty(self, penalty: ConflictPenalty) -> Self {
        Self { penalty, ..self }
    }

    pub fn penalty(&self) -> ConflictPenalty {
        self.penalty
    }

    pub fn warning_threshold(&self) -> f64 {
        self.warning_threshold
    }

    /// Whether a fold step's conflict is high enough to report.
    pub fn exceeds_warning(&self, conflict: f64) -> bool {
        conflict > self.warning_threshold
    }

    /// `(step, K)` for every fold step above the warning threshold.
    pub fn high_conflict_steps<'a>(
        &'a self,
        conflict_trace: &'a [f64],
    ) -> impl Iterator<Item = (usize, f64)> + 'a {
        conflict_trace
            .iter()
            .copied()
            .enumerate()
            .filter(move |(_, k)| self.exceeds_warning(*k))
    }

    /// Combine two mass functions.
    pub fn combine(&self, m1: &MassFunction, m2: &MassFunction) -> FaultFuseResult<PairwiseCombination> {
        dempster::combine(m1, m2, self.penalty, self.epsilon)
    }

    /// Combine all of `masses` into one mass function.
    ///
    /// The conjunctive masses are accumulated across every input first and
    /// the conflict penalty is applied once to the total, so the result is
    /// the same for any ordering of `masses`. The trace records each step's
    /// K in input order.
    ///
    /// No input yields the vacuous function and one input passes through
    /// unchanged. Under the pure Dempster rule an aggregate conflict of at
    /// least `1 - epsilon` is an error; it is reported at the first step
    /// that reaches it, or after the last step.
    pub fn combine_all(&self, masses: &[MassFunction]) -> FaultFuseResult<FusionOutcome> {
        let mut iter = masses.iter();
        let Some(first) = iter.next() else {
            return Ok(FusionOutcome {
                fused: MassFunction::vacuous(),
                conflict_trace: Vec::new(),
            });
        };
        if masses.len() == 1 {
            return Ok(FusionOutcome {
                fused: first.clone(),
                conflict_trace: Vec::new(),
            });
        }

        let pure_dempster = self.penalty.is_pure_dempster();
        let mut conjunction = Conjunction::new(first);
        let mut conflict_trace = Vec::with_capacity(masses.len() - 1);

        for (step, next) in iter.enumerate() {
            let conflict = conjunction.absorb(next);
            debug!(step, conflict, "fold step");
            conflict_trace.push(conflict);
            if pure_dempster && dempster::is_total_conflict(conflict, self.epsilon) {
                return Err(total_conflict(conflict_trace));
            }
        }

        if pure_dempster && dempster::is_total_conflict(aggregate_conflict(&conflict_trace), self.epsilon) {
            return Err(total_conflict(conflict_trace));
        }

        Ok(FusionOutcome {
            fused: conjunction.resolve(self.penalty)?,
            conflict_trace,
        })
    }
}

fn total_conflict(conflict_trace: Vec<f64>) -> FaultFuseError {
    FusionError::TotalConflict {
        conflict: aggregate_conflict(&conflict_trace),
        conflict_trace,
    }
    .into()
}

impl Default for DsFusionCore {
    fn default() -> Self {
        Self::new(
            ConflictPenalty::DEMPSTER,
            defaults::DEFAULT_TOTAL_CONFLICT_EPSILON,
            defaults::DEFAULT_CONFLICT_WARNING_THRESHOLD,
        )
    }
}
