//! The frame of discernment: the closed, ordered set of fault hypotheses.

mod fault_type;
mod severity;

pub use fault_type::FaultType;
pub use severity::Severity;

use crate::errors::MassError;

/// Θ: the exhaustive, mutually exclusive set of fault hypotheses plus the
/// universal hypothesis ([`FaultType::Unknown`]) standing for total ignorance.
///
/// The order of [`FrameOfDiscernment::SINGLETONS`] is the deterministic
/// tie-break order used by the decision rule.
///
/// # Examples
///
/// ```
/// use faultfuse_core::{FaultType, FrameOfDiscernment};
///
/// assert_eq!(FrameOfDiscernment::size(), 9);
/// assert_eq!(FrameOfDiscernment::resolve("gear_damage").unwrap(), FaultType::GearDamage);
/// assert!(FrameOfDiscernment::resolve("flux_capacitor").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOfDiscernment;

impl FrameOfDiscernment {
    /// Singleton hypotheses in tie-break order. Faults precede `Normal` so a
    /// tie between a fault and normality resolves toward the fault.
    pub const SINGLETONS: [FaultType; 9] = [
        FaultType::BearingFault,
        FaultType::GearDamage,
        FaultType::Imbalance,
        FaultType::Misalignment,
        FaultType::Looseness,
        FaultType::Overheating,
        FaultType::LubricationFailure,
        FaultType::ElectricalFault,
        FaultType::Normal,
    ];

    /// Number of singleton hypotheses (excluding the universal set).
    pub fn size() -> usize {
        Self::SINGLETONS.len()
    }

    /// Every member of Θ, singletons first, universal hypothesis last.
    pub fn hypotheses() -> impl Iterator<Item = FaultType> {
        Self::SINGLETONS
            .into_iter()
            .chain(std::iter::once(FaultType::Unknown))
    }

    /// Hypothesis codes of every member of Θ, in frame order.
    pub fn codes() -> Vec<&'static str> {
        Self::hypotheses().map(FaultType::code).collect()
    }

    /// Resolve a hypothesis code, failing if it is not part of Θ.
    pub fn resolve(code: &str) -> Result<FaultType, MassError> {
        FaultType::from_code(code).ok_or_else(|| MassError::UnknownHypothesis {
            code: code.to_string(),
        })
    }
}
