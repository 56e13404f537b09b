/// FaultFuse version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tolerance used when checking that a mass function sums to 1.
pub const MASS_EPSILON: f64 = 1e-6;

/// Lowest weight an expert may carry. A zero weight reduces the expert to total ignorance.
pub const MIN_EXPERT_WEIGHT: f64 = 0.0;

/// Highest weight an expert may carry. Weights above 1 amplify the expert's evidence.
pub const MAX_EXPERT_WEIGHT: f64 = 5.0;

/// Weight at which an expert's evidence passes through discounting unchanged.
pub const FULL_TRUST_WEIGHT: f64 = 1.0;

/// Hard ceiling on the history ring buffer, regardless of config.
pub const MAX_HISTORY_CAPACITY: usize = 100_000;
