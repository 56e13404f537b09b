/// Expert registry misuse. Recoverable and surfaced to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("expert already registered: {0}")]
    DuplicateExpertName(String),

    #[error("expert not found: {0}")]
    ExpertNotFound(String),

    #[error("invalid weight {weight} for expert {name}: must be within [{min}, {max}]")]
    InvalidWeight {
        name: String,
        weight: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown built-in expert kind: {0}")]
    UnknownExpertKind(String),
}
