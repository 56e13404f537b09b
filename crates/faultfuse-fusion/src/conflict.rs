//! Conflict penalty factor c ∈ [0, 1].
//!
//! Governs what happens to the conflict mass K of a combination:
//!
//! - `c = 0`: classical Dempster rule. Non-conflicting mass is divided by `1 - K`.
//! - `c = 1`: no renormalization. K is added to the ignorance mass m(Θ).
//! - `0 < c < 1`: linear blend `m = (1 - c)·normalized + c·redistributed`.
//!
//! The blend is a documented policy of this engine, not Yager's rule. It is
//! applied once to the conjunctive combination of all inputs, never per
//! pair, so fusion stays independent of input order for every `c`.

use std::fmt;

use faultfuse_core::errors::FusionError;

/// A validated conflict penalty factor.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ConflictPenalty(f64);

impl ConflictPenalty {
    /// Classical normalized Dempster rule.
    pub const DEMPSTER: ConflictPenalty = ConflictPenalty(0.0);
    /// All conflict mass becomes ignorance.
    pub const FULL_REDISTRIBUTION: ConflictPenalty = ConflictPenalty(1.0);

    pub fn new(factor: f64) -> Result<Self, FusionError> {
        if (0.0..=1.0).contains(&factor) {
            Ok(Self(factor))
        } else {
            Err(FusionError::InvalidConflictPenalty(factor))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether conflict is handled purely by renormalization.
    pub fn is_pure_dempster(self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for ConflictPenalty {
    type Error = FusionError;

    fn try_from(factor: f64) -> Result<Self, Self::Error> {
        Self::new(factor)
    }
}

impl fmt::Display for ConflictPenalty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
