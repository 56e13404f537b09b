//! ExpertRegistry — membership and reliability weights of evidence sources.
//!
//! Entries keep registration order; that order is the order of the conflict
//! trace and of every listing. Names are unique. The registry itself is a
//! plain value: the engine guards it with its own lock and clones it to take
//! a per-call snapshot.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use faultfuse_core::config::{BuiltinExpertKind, ExpertsConfig};
use faultfuse_core::constants::{MAX_EXPERT_WEIGHT, MIN_EXPERT_WEIGHT};
use faultfuse_core::errors::RegistryError;
use faultfuse_core::{Expert, ExpertOpinion, FaultFuseError, FaultFuseResult, SensorSnapshot};

use crate::builtin::BuiltinExpert;

/// A registered evidence source: one of the built-ins, or any custom
/// [`Expert`] implementation.
#[derive(Clone)]
pub enum ExpertHandle {
    Builtin(BuiltinExpert),
    Custom(Arc<dyn Expert>),
}

impl ExpertHandle {
    fn as_expert(&self) -> &dyn Expert {
        match self {
            Self::Builtin(e) => e as &dyn Expert,
            Self::Custom(e) => e.as_ref(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }
}

impl Expert for ExpertHandle {
    fn name(&self) -> &str {
        self.as_expert().name()
    }

    fn kind(&self) -> &str {
        self.as_expert().kind()
    }

    fn evaluate(&self, snapshot: &SensorSnapshot) -> FaultFuseResult<ExpertOpinion> {
        self.as_expert().evaluate(snapshot)
    }
}

impl fmt::Debug for ExpertHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(e) => f.debug_tuple("Builtin").field(e).finish(),
            Self::Custom(e) => f.debug_tuple("Custom").field(&e.name()).finish(),
        }
    }
}

/// A registry entry.
#[derive(Debug, Clone)]
pub struct RegisteredExpert {
    pub name: String,
    pub kind: String,
    pub weight: f64,
    pub handle: ExpertHandle,
}

/// What one expert said about one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpertEvaluation {
    pub name: String,
    pub weight: f64,
    pub opinion: ExpertOpinion,
}

/// Registered experts in registration order.
#[derive(Debug, Clone, Default)]
pub struct ExpertRegistry {
    experts: Vec<RegisteredExpert>,
}

impl ExpertRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-ins enabled in `config`, each at the
    /// default weight.
    pub fn with_builtins(config: &ExpertsConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for kind in &config.enabled {
            registry.register_builtin(*kind, None, config)?;
        }
        Ok(registry)
    }

    /// Reject weights outside `[MIN_EXPERT_WEIGHT, MAX_EXPERT_WEIGHT]`.
    pub fn validate_weight(name: &str, weight: f64) -> Result<(), RegistryError> {
        if weight.is_finite() && (MIN_EXPERT_WEIGHT..=MAX_EXPERT_WEIGHT).contains(&weight) {
            Ok(())
        } else {
            Err(RegistryError::InvalidWeight {
                name: name.to_string(),
                weight,
                min: MIN_EXPERT_WEIGHT,
                max: MAX_EXPERT_WEIGHT,
            })
        }
    }

    /// Register an expert under the name it reports.
    pub fn register(&mut self, handle: ExpertHandle, weight: f64) -> Result<(), RegistryError> {
        let name = handle.name().to_string();
        Self::validate_weight(&name, weight)?;
        if self.contains(&name) {
            return Err(RegistryError::DuplicateExpertName(name));
        }
        debug!(expert = %name, weight, "registering expert");
        self.experts.push(RegisteredExpert {
            kind: handle.kind().to_string(),
            name,
            weight,
            handle,
        });
        Ok(())
    }

    /// Register a built-in expert. `weight` defaults to `config.default_weight`.
    pub fn register_builtin(
        &mut self,
        kind: BuiltinExpertKind,
        weight: Option<f64>,
        config: &ExpertsConfig,
    ) -> Result<(), RegistryError> {
        let expert = BuiltinExpert::from_kind(kind, config);
        self.register(
            ExpertHandle::Builtin(expert),
            weight.unwrap_or(config.default_weight),
        )
    }

    /// Register a custom expert.
    pub fn register_custom(
        &mut self,
        expert: Arc<dyn Expert>,
        weight: f64,
    ) -> Result<(), RegistryError> {
        self.register(ExpertHandle::Custom(expert), weight)
    }

    /// Remove an expert. Returns whether it was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.experts.len();
        self.experts.retain(|e| e.name != name);
        self.experts.len() != before
    }

    /// Set an expert's weight and return the previous one.
    pub fn update_weight(&mut self, name: &str, weight: f64) -> Result<f64, RegistryError> {
        let entry = self
            .experts
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| RegistryError::ExpertNotFound(name.to_string()))?;
        Self::validate_weight(name, weight)?;
        Ok(std::mem::replace(&mut entry.weight, weight))
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredExpert> {
        self.experts.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Every expert in registration order.
    pub fn list_all(&self) -> &[RegisteredExpert] {
        &self.experts
    }

    pub fn names(&self) -> Vec<&str> {
        self.experts.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn weights(&self) -> BTreeMap<String, f64> {
        self.experts
            .iter()
            .map(|e| (e.name.clone(), e.weight))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.experts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experts.is_empty()
    }

    /// Evaluate every expert against `snapshot`, in registration order.
    ///
    /// With `parallel` set the experts run on the rayon pool; results still
    /// come back in registration order. An expert error fails the whole
    /// call. A malformed mass function keeps its own error kind, anything
    /// else is reported as [`FaultFuseError::ExpertFailed`].
    pub fn evaluate_all(
        &self,
        snapshot: &SensorSnapshot,
        parallel: bool,
    ) -> FaultFuseResult<Vec<ExpertEvaluation>> {
        if parallel {
            self.experts
                .par_iter()
                .map(|e| evaluate_one(e, snapshot))
                .collect()
        } else {
            self.experts
                .iter()
                .map(|e| evaluate_one(e, snapshot))
                .collect()
        }
    }
}

fn evaluate_one(
    entry: &RegisteredExpert,
    snapshot: &SensorSnapshot,
) -> FaultFuseResult<ExpertEvaluation> {
    let opinion = entry.handle.evaluate(snapshot).map_err(|e| match e {
        FaultFuseError::InvalidMassFunction(_) => e,
        other => FaultFuseError::ExpertFailed {
            expert: entry.name.clone(),
            reason: other.to_string(),
        },
    })?;
    Ok(ExpertEvaluation {
        name: entry.name.clone(),
        weight: entry.weight,
        opinion,
    })
}
