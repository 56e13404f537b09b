//! Conjunctive combination of mass functions.
//!
//! With only singletons and Θ as focal elements the intersection table is
//! small:
//!
//! | m1 \ m2 | g         | Θ |
//! |---------|-----------|---|
//! | h = g   | h         | h |
//! | h ≠ g   | ∅ (K)     | h |
//! | Θ       | g         | Θ |
//!
//! The unnormalized conjunctive rule is associative and commutative, so any
//! number of inputs is accumulated first and the conflict K (mass on ∅) is
//! handled once at the end by the [`ConflictPenalty`]. The result therefore
//! does not depend on the order of the inputs for any penalty.

use std::collections::BTreeMap;

use faultfuse_core::errors::{FusionError, MassError};
use faultfuse_core::{FaultType, FaultFuseResult, MassFunction};

use crate::conflict::ConflictPenalty;

/// The result of combining exactly two mass functions.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseCombination {
    pub mass: MassFunction,
    /// Mass that fell on the empty set before conflict handling.
    pub conflict: f64,
}

/// Running unnormalized conjunctive combination.
///
/// Holds the joint singleton masses and the joint Θ mass. The conflict is
/// whatever is missing from their sum and is never materialized.
#[derive(Debug, Clone)]
pub(crate) struct Conjunction {
    joint: BTreeMap<FaultType, f64>,
    theta: f64,
}

impl Conjunction {
    pub(crate) fn new(first: &MassFunction) -> Self {
        Self {
            joint: first.singletons().collect(),
            theta: first.ignorance(),
        }
    }

    /// Mass not on the empty set.
    pub(crate) fn retained(&self) -> f64 {
        self.joint.values().sum::<f64>() + self.theta
    }

    /// Intersect `next` into the running combination and return the share of
    /// the previously retained mass that this step moved onto ∅.
    ///
    /// For two normalized inputs this is the classical pairwise K, and the
    /// product of `1 - K_i` over all steps is the retained mass.
    pub(crate) fn absorb(&mut self, next: &MassFunction) -> f64 {
        let before = self.retained();
        let next_theta = next.ignorance();
        let mut joint: BTreeMap<FaultType, f64> = BTreeMap::new();
        let mut moved = 0.0;

        for (&h, &a) in &self.joint {
            *joint.entry(h).or_insert(0.0) += a * next_theta;
            for (g, b) in next.singletons() {
                if h == g {
                    *joint.entry(h).or_insert(0.0) += a * b;
                } else {
                    moved += a * b;
                }
            }
        }
        for (g, b) in next.singletons() {
            *joint.entry(g).or_insert(0.0) += self.theta * b;
        }

        self.joint = joint;
        self.theta *= next_theta;

        if before > 0.0 {
            (moved / before).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Apply the conflict policy `(1 - c)·N + c·R` to the accumulated masses.
    ///
    /// N renormalizes the retained mass and R leaves the joint singleton
    /// masses as they are, so in both the conflict ends up on Θ. When no
    /// mass is retained at all only R is defined and the result is vacuous.
    pub(crate) fn resolve(self, penalty: ConflictPenalty) -> Result<MassFunction, MassError> {
        let retained = self.retained();
        if retained <= 0.0 {
            return Ok(MassFunction::vacuous());
        }
        let c = penalty.value();
        let scale = (1.0 - c) / retained + c;
        // Θ is inferred as the remainder, so the result always sums to one.
        MassFunction::new(self.joint.into_iter().map(|(h, m)| (h, m * scale)))
    }
}

/// Combine two mass functions under `penalty`.
///
/// `epsilon` bounds how close K may get to 1 before the pair counts as total
/// conflict. Under the pure Dempster rule total conflict is an error; with
/// any penalty above zero the blend still applies, and a pair with no
/// retained mass at all becomes total ignorance.
///
/// # Examples
///
/// ```
/// use faultfuse_core::{FaultType, MassFunction};
/// use faultfuse_fusion::dempster::combine;
/// use faultfuse_fusion::ConflictPenalty;
///
/// let a = MassFunction::simple_support(FaultType::BearingFault, 0.6).unwrap();
/// let b = MassFunction::simple_support(FaultType::BearingFault, 0.7).unwrap();
/// let pair = combine(&a, &b, ConflictPenalty::DEMPSTER, 1e-6).unwrap();
/// assert!((pair.mass.mass(FaultType::BearingFault) - 0.88).abs() < 1e-12);
/// assert_eq!(pair.conflict, 0.0);
/// ```
pub fn combine(
    m1: &MassFunction,
    m2: &MassFunction,
    penalty: ConflictPenalty,
    epsilon: f64,
) -> FaultFuseResult<PairwiseCombination> {
    let mut conjunction = Conjunction::new(m1);
    let conflict = conjunction.absorb(m2);

    if is_total_conflict(conflict, epsilon) && penalty.is_pure_dempster() {
        return Err(FusionError::TotalConflict {
            conflict,
            conflict_trace: vec![conflict],
        }
        .into());
    }

    let mass = conjunction.resolve(penalty)?;
    Ok(PairwiseCombination { mass, conflict })
}

pub(crate) fn is_total_conflict(conflict: f64, epsilon: f64) -> bool {
    conflict >= 1.0 - epsilon
}
