use crate::errors::FaultFuseResult;
use crate::mass::MassFunction;
use crate::models::SensorSnapshot;

/// What an expert says about one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpertOpinion {
    /// A committed mass function.
    Evidence(MassFunction),
    /// Required inputs are missing or outside the expert's operating range.
    /// This is evidence of ignorance, never evidence of normality.
    Abstain { reason: String },
}

impl ExpertOpinion {
    pub fn abstain(reason: impl Into<String>) -> Self {
        Self::Abstain {
            reason: reason.into(),
        }
    }

    pub fn is_abstain(&self) -> bool {
        matches!(self, Self::Abstain { .. })
    }

    /// The mass function this opinion contributes to fusion. Abstention is
    /// the vacuous function (all mass on Θ).
    pub fn mass(&self) -> MassFunction {
        match self {
            Self::Evidence(m) => m.clone(),
            Self::Abstain { .. } => MassFunction::vacuous(),
        }
    }
}

/// An evidence source. Implementations must be pure functions of the
/// snapshot: no side effects, no interior state that changes between calls.
pub trait Expert: Send + Sync {
    /// Unique registry name.
    fn name(&self) -> &str;

    /// Kind tag reported in listings. Built-ins report their kind code.
    fn kind(&self) -> &str {
        "custom"
    }

    /// Evaluate one snapshot.
    ///
    /// Returning `Err` fails the whole diagnosis; abstaining never does.
    fn evaluate(&self, snapshot: &SensorSnapshot) -> FaultFuseResult<ExpertOpinion>;
}
