/// Evidence combination errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FusionError {
    /// Every pair of focal elements was disjoint and the conflict policy
    /// allows no redistribution, so no usable evidence remains.
    /// `conflict` is the aggregate K and `conflict_trace` holds K for every
    /// step up to and including the one that reached total conflict.
    #[error("total conflict between evidence sources: K = {conflict:.6}")]
    TotalConflict {
        conflict: f64,
        conflict_trace: Vec<f64>,
    },

    #[error("conflict penalty factor {0} is outside [0, 1]")]
    InvalidConflictPenalty(f64),
}
