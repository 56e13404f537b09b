use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence combination settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Initial conflict penalty c ∈ [0, 1]. 0 = normalized Dempster rule,
    /// 1 = all conflict moved to ignorance. Default: 0.0.
    pub conflict_penalty_factor: f64,
    /// K at or above `1 - epsilon` counts as total conflict. Default: 1e-6.
    pub total_conflict_epsilon: f64,
    /// Fold steps with K above this emit a warning event. Default: 0.5.
    pub conflict_warning_threshold: f64,
    /// Evaluate experts on the rayon pool. Default: false.
    pub parallel_evaluation: bool,
    /// Minimum expert count before parallel evaluation kicks in. Default: 8.
    pub parallel_threshold: usize,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            conflict_penalty_factor: defaults::DEFAULT_CONFLICT_PENALTY_FACTOR,
            total_conflict_epsilon: defaults::DEFAULT_TOTAL_CONFLICT_EPSILON,
            conflict_warning_threshold: defaults::DEFAULT_CONFLICT_WARNING_THRESHOLD,
            parallel_evaluation: defaults::DEFAULT_PARALLEL_EVALUATION,
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
