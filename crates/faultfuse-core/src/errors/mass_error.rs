/// Malformed basic probability assignments.
///
/// These indicate a programming error in whoever built the mass function
/// (usually an expert). They are fatal to the diagnosis that produced them
/// and are never clamped away.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MassError {
    #[error("negative mass {mass} assigned to {hypothesis}")]
    NegativeMass { hypothesis: String, mass: f64 },

    #[error("non-finite mass assigned to {hypothesis}")]
    NonFiniteMass { hypothesis: String },

    #[error("masses sum to {sum:.9}, expected 1.0")]
    NotNormalized { sum: f64 },

    #[error("singleton masses sum to {sum:.9}, which exceeds 1.0")]
    SingletonOverflow { sum: f64 },

    #[error("hypothesis not in frame of discernment: {code}")]
    UnknownHypothesis { code: String },

    #[error("duplicate focal element: {hypothesis}")]
    DuplicateFocalElement { hypothesis: String },
}
