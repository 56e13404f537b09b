//! Reliability discounting.
//!
//! For weight `w ≤ 1` this is Shafer's classical discounting:
//!
//! ```text
//! m'(h) = w · m(h)                 for every singleton h
//! m'(Θ) = 1 − w · (1 − m(Θ))
//! ```
//!
//! For `1 < w ≤ 5` the expert is amplified: ignorance shrinks to `m(Θ)^w`
//! and singleton masses grow proportionally to absorb the difference. Both
//! branches meet at `w = 1` (identity) and are monotone in `w`, so a higher
//! weight never lowers the mass an expert puts on its own hypotheses.

use faultfuse_core::constants::{FULL_TRUST_WEIGHT, MASS_EPSILON, MAX_EXPERT_WEIGHT, MIN_EXPERT_WEIGHT};
use faultfuse_core::errors::MassError;
use faultfuse_core::{FaultType, MassFunction};

/// Applies a reliability weight to an expert's mass function.
pub struct EvidenceDiscounter;

impl EvidenceDiscounter {
    /// Discount (or amplify) `mass` by `weight`.
    ///
    /// Weights are clamped to the registry bounds; a non-finite weight is
    /// treated as zero trust.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultfuse_core::{FaultType, MassFunction};
    /// use faultfuse_fusion::EvidenceDiscounter;
    ///
    /// let m = MassFunction::simple_support(FaultType::BearingFault, 0.8).unwrap();
    /// let half = EvidenceDiscounter::discount(&m, 0.5).unwrap();
    /// assert!((half.mass(FaultType::BearingFault) - 0.4).abs() < 1e-12);
    /// assert!((half.ignorance() - 0.6).abs() < 1e-12);
    ///
    /// let none = EvidenceDiscounter::discount(&m, 0.0).unwrap();
    /// assert!(none.is_vacuous());
    /// ```
    pub fn discount(mass: &MassFunction, weight: f64) -> Result<MassFunction, MassError> {
        let w = Self::effective_weight(weight);

        if w <= FULL_TRUST_WEIGHT {
            let entries = mass
                .singletons()
                .map(|(h, m)| (h, w * m))
                .chain(std::iter::once((
                    FaultType::Unknown,
                    1.0 - w * (1.0 - mass.ignorance()),
                )));
            return MassFunction::new(entries);
        }

        let committed = 1.0 - mass.ignorance();
        if committed < MASS_EPSILON || mass.ignorance() < MASS_EPSILON {
            // Nothing to amplify: pure ignorance stays ignorant, a fully
            // committed source is already at its maximum.
            return Ok(mass.clone());
        }

        let ignorance = mass.ignorance().powf(w);
        let scale = (1.0 - ignorance) / committed;
        let entries = mass
            .singletons()
            .map(|(h, m)| (h, m * scale))
            .chain(std::iter::once((FaultType::Unknown, ignorance)));
        MassFunction::new(entries)
    }

    /// Weight after clamping to `[MIN_EXPERT_WEIGHT, MAX_EXPERT_WEIGHT]`.
    pub fn effective_weight(weight: f64) -> f64 {
        if weight.is_finite() {
            weight.clamp(MIN_EXPERT_WEIGHT, MAX_EXPERT_WEIGHT)
        } else {
            MIN_EXPERT_WEIGHT
        }
    }

    /// Share of the registry weight range a weight represents, in [0, 1].
    pub fn normalized_weight(weight: f64) -> f64 {
        Self::effective_weight(weight) / MAX_EXPERT_WEIGHT
    }
}
