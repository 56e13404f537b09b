//! FusionDiagnosisEngine — evidence collection, discounting, fusion, and
//! decision for one sensor snapshot at a time.
//!
//! Shared mutable state is the expert registry and the conflict penalty.
//! Both live behind one `RwLock`; `diagnose` clones them at call start, so a
//! concurrent weight update or penalty change never reaches an in-flight
//! fusion. History has its own lock inside [`DiagnosisHistoryStore`].

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use faultfuse_core::config::{BuiltinExpertKind, ExpertsConfig};
use faultfuse_core::constants::VERSION;
use faultfuse_core::errors::FusionError;
use faultfuse_core::models::{DiagnosisReport, HistoryPage};
use faultfuse_core::{
    DiagnosisResult, Expert, ExpertOpinion, FaultFuseConfig, FaultFuseError, FaultFuseResult,
    FaultType, FrameOfDiscernment, HistoryEntry, HistorySink, MassFunction, SensorSnapshot,
};
use faultfuse_experts::ExpertRegistry;
use faultfuse_fusion::{ConflictPenalty, DecisionRule, DsFusionCore, ExpertEvidence};

use crate::history::DiagnosisHistoryStore;
use crate::tracing_setup::events;
use crate::views::{EngineConfigView, ExpertListing, ExpertSummary, FaultTypeCatalog};

/// Registry and fusion policy, read together at the start of every diagnosis.
#[derive(Debug, Clone)]
struct EngineState {
    registry: ExpertRegistry,
    fusion: DsFusionCore,
}

/// The multi-expert diagnosis engine.
pub struct FusionDiagnosisEngine {
    state: RwLock<EngineState>,
    history: DiagnosisHistoryStore,
    decision: DecisionRule,
    sink: Option<Arc<dyn HistorySink>>,
    experts_config: ExpertsConfig,
    parallel_threshold: Option<usize>,
}

impl FusionDiagnosisEngine {
    /// Build an engine from a validated config, registering the enabled
    /// built-in experts.
    pub fn new(config: FaultFuseConfig) -> FaultFuseResult<Self> {
        config.validate()?;
        let registry = ExpertRegistry::with_builtins(&config.experts)?;
        let fusion = DsFusionCore::from_config(&config.fusion)?;
        info!(
            experts = registry.len(),
            conflict_penalty = %fusion.penalty(),
            history_capacity = config.history.capacity,
            "diagnosis engine initialized"
        );
        Ok(Self {
            state: RwLock::new(EngineState { registry, fusion }),
            history: DiagnosisHistoryStore::new(config.history.capacity),
            decision: DecisionRule::default(),
            sink: None,
            parallel_threshold: config
                .fusion
                .parallel_evaluation
                .then_some(config.fusion.parallel_threshold),
            experts_config: config.experts,
        })
    }

    /// Forward every recorded diagnosis to `sink` as well.
    pub fn with_sink(mut self, sink: Arc<dyn HistorySink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace the decision rule (custom severity bands).
    pub fn with_decision_rule(mut self, decision: DecisionRule) -> Self {
        self.decision = decision;
        self
    }

    fn read_state(&self) -> FaultFuseResult<RwLockReadGuard<'_, EngineState>> {
        self.state
            .read()
            .map_err(|e| FaultFuseError::ConcurrencyError(format!("engine state lock poisoned: {e}")))
    }

    fn write_state(&self) -> FaultFuseResult<RwLockWriteGuard<'_, EngineState>> {
        self.state
            .write()
            .map_err(|e| FaultFuseError::ConcurrencyError(format!("engine state lock poisoned: {e}")))
    }

    // --- diagnosis ---

    /// Diagnose one snapshot and record it in history.
    ///
    /// Total conflict is not an error: it yields an `unknown` result with
    /// the conflict trace attached. An empty registry yields `unknown`
    /// without running fusion.
    #[instrument(skip(self, snapshot), fields(readings = snapshot.readings.len()))]
    pub fn diagnose(&self, snapshot: SensorSnapshot) -> FaultFuseResult<DiagnosisReport> {
        let started = Instant::now();
        let state = self.read_state()?.clone();

        let result = if state.registry.is_empty() {
            DiagnosisResult::undiagnosable(Vec::new(), Vec::new())
        } else {
            self.fuse(&state, &snapshot)?
        };

        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            input_fingerprint: snapshot.compute_fingerprint()?,
            input: snapshot,
            result,
            duration_ms: started.elapsed().as_secs_f64() * 1000.0,
        };
        events::diagnosis_completed(
            &entry.id,
            entry.result.fault_type.code(),
            entry.result.confidence,
            entry.result.severity.code(),
            entry.result.conflict_mass,
            entry.duration_ms,
        );

        let report = DiagnosisReport::from(&entry);
        self.record(entry)?;
        Ok(report)
    }

    fn fuse(&self, state: &EngineState, snapshot: &SensorSnapshot) -> FaultFuseResult<DiagnosisResult> {
        let parallel = self
            .parallel_threshold
            .is_some_and(|threshold| state.registry.len() >= threshold);
        let evaluations = state.registry.evaluate_all(snapshot, parallel)?;

        let evidence = evaluations
            .iter()
            .map(|e| {
                if let ExpertOpinion::Abstain { reason } = &e.opinion {
                    events::expert_abstained(&e.name, reason);
                }
                ExpertEvidence::from_opinion(e.name.as_str(), e.weight, &e.opinion)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let masses: Vec<MassFunction> = evidence.iter().map(|e| e.discounted.clone()).collect();

        match state.fusion.combine_all(&masses) {
            Ok(outcome) => {
                for (step, conflict) in state.fusion.high_conflict_steps(&outcome.conflict_trace) {
                    events::high_conflict(step, conflict, state.fusion.warning_threshold());
                }
                Ok(self
                    .decision
                    .decide(&outcome.fused, outcome.conflict_trace, &evidence))
            }
            Err(FaultFuseError::Fusion(FusionError::TotalConflict {
                conflict,
                conflict_trace,
            })) => {
                events::total_conflict(conflict, conflict_trace.len());
                Ok(DiagnosisResult::undiagnosable(
                    conflict_trace,
                    DecisionRule::breakdown(&evidence, FaultType::Unknown),
                ))
            }
            Err(e) => Err(e),
        }
    }

    /// Forward to the sink, then append. Sink failures are logged only.
    fn record(&self, entry: HistoryEntry) -> FaultFuseResult<()> {
        if let Some(sink) = &self.sink {
            if let Err(e) = sink.persist(&entry) {
                events::sink_failed(&entry.id, &e.to_string());
            }
        }
        self.history.append(entry)?;
        Ok(())
    }

    // --- registry ---

    pub fn list_experts(&self) -> FaultFuseResult<ExpertListing> {
        Ok(ExpertListing::from_registered(
            self.read_state()?.registry.list_all(),
        ))
    }

    pub fn update_weight(&self, expert_name: &str, weight: f64) -> FaultFuseResult<()> {
        let previous = self.write_state()?.registry.update_weight(expert_name, weight)?;
        events::weight_updated(expert_name, previous, weight);
        Ok(())
    }

    /// Register a built-in expert by kind code or registry name
    /// (`"vibration"` or `"vibration_expert"`).
    pub fn register_builtin_expert(&self, kind: &str, weight: Option<f64>) -> FaultFuseResult<()> {
        let kind: BuiltinExpertKind = kind.parse()?;
        self.register_builtin_kind(kind, weight)
    }

    pub fn register_builtin_kind(
        &self,
        kind: BuiltinExpertKind,
        weight: Option<f64>,
    ) -> FaultFuseResult<()> {
        let weight = weight.unwrap_or(self.experts_config.default_weight);
        self.write_state()?
            .registry
            .register_builtin(kind, Some(weight), &self.experts_config)?;
        events::expert_registered(kind.expert_name(), kind.code(), weight);
        Ok(())
    }

    /// Register a custom expert under the name it reports.
    pub fn register_expert(&self, expert: Arc<dyn Expert>, weight: f64) -> FaultFuseResult<()> {
        let name = expert.name().to_string();
        let kind = expert.kind().to_string();
        self.write_state()?.registry.register_custom(expert, weight)?;
        events::expert_registered(&name, &kind, weight);
        Ok(())
    }

    /// Returns whether an expert was removed. Absence is not an error.
    pub fn unregister_expert(&self, expert_name: &str) -> FaultFuseResult<bool> {
        let removed = self.write_state()?.registry.unregister(expert_name);
        if removed {
            events::expert_unregistered(expert_name);
        }
        Ok(removed)
    }

    // --- fusion policy ---

    pub fn conflict_penalty(&self) -> FaultFuseResult<f64> {
        Ok(self.read_state()?.fusion.penalty().value())
    }

    pub fn set_conflict_penalty(&self, factor: f64) -> FaultFuseResult<()> {
        let penalty = ConflictPenalty::new(factor)?;
        let mut state = self.write_state()?;
        let previous = state.fusion.penalty();
        state.fusion = state.fusion.with_penalty(penalty);
        drop(state);
        events::conflict_penalty_changed(previous.value(), penalty.value());
        Ok(())
    }

    // --- catalog & config ---

    pub fn fault_types(&self) -> FaultTypeCatalog {
        FaultTypeCatalog::build()
    }

    pub fn config_view(&self) -> FaultFuseResult<EngineConfigView> {
        let state = self.read_state()?;
        let experts: Vec<ExpertSummary> = state
            .registry
            .list_all()
            .iter()
            .map(ExpertSummary::from)
            .collect();
        Ok(EngineConfigView {
            version: VERSION.to_string(),
            frame_of_discernment: FrameOfDiscernment::SINGLETONS
                .iter()
                .map(|h| h.code().to_string())
                .collect(),
            expert_count: experts.len(),
            experts,
            fault_types: FrameOfDiscernment::codes()
                .into_iter()
                .map(str::to_string)
                .collect(),
            conflict_penalty_factor: state.fusion.penalty().value(),
        })
    }

    // --- history ---

    /// Recorded diagnoses, newest first.
    pub fn history(&self, limit: usize, offset: usize) -> FaultFuseResult<HistoryPage> {
        self.history.page(limit, offset)
    }

    pub fn history_entry(&self, diagnosis_id: &str) -> FaultFuseResult<Option<HistoryEntry>> {
        self.history.get(diagnosis_id)
    }

    pub fn clear_history(&self) -> FaultFuseResult<usize> {
        self.history.clear()
    }

    pub fn history_store(&self) -> &DiagnosisHistoryStore {
        &self.history
    }
}
