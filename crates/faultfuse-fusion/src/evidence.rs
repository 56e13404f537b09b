use faultfuse_core::errors::MassError;
use faultfuse_core::{ExpertOpinion, MassFunction};

use crate::discount::EvidenceDiscounter;

/// One expert's evidence for a single diagnosis, before and after
/// reliability discounting.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpertEvidence {
    pub name: String,
    pub weight: f64,
    pub abstained: bool,
    /// Mass function as the expert produced it.
    pub raw: MassFunction,
    /// Mass function after discounting by `weight`. This is what enters fusion.
    pub discounted: MassFunction,
}

impl ExpertEvidence {
    /// Discount an expert's opinion by its registry weight. Abstention
    /// becomes the vacuous function, which discounting leaves untouched.
    pub fn from_opinion(
        name: impl Into<String>,
        weight: f64,
        opinion: &ExpertOpinion,
    ) -> Result<Self, MassError> {
        let raw = opinion.mass();
        let discounted = EvidenceDiscounter::discount(&raw, weight)?;
        Ok(Self {
            name: name.into(),
            weight,
            abstained: opinion.is_abstain(),
            raw,
            discounted,
        })
    }
}
