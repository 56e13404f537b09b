//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed diagnosis.
pub fn diagnosis_completed(
    diagnosis_id: &str,
    fault_type: &str,
    confidence: f64,
    severity: &str,
    conflict_mass: f64,
    duration_ms: f64,
) {
    tracing::info!(
        event = "diagnosis_completed",
        diagnosis_id = %diagnosis_id,
        fault_type = %fault_type,
        confidence = confidence,
        severity = %severity,
        conflict_mass = conflict_mass,
        duration_ms = duration_ms,
        "diagnosis completed"
    );
}

/// Log an expert that contributed pure ignorance.
pub fn expert_abstained(expert: &str, reason: &str) {
    tracing::debug!(
        event = "expert_abstained",
        expert = %expert,
        reason = %reason,
        "expert abstained"
    );
}

/// Log a fold step whose conflict exceeded the warning threshold.
pub fn high_conflict(step: usize, conflict: f64, threshold: f64) {
    tracing::warn!(
        event = "high_conflict",
        step = step,
        conflict = conflict,
        threshold = threshold,
        "high conflict between evidence sources"
    );
}

/// Log total conflict; the diagnosis degrades to unknown.
pub fn total_conflict(conflict: f64, steps: usize) {
    tracing::warn!(
        event = "total_conflict",
        conflict = conflict,
        steps = steps,
        "total conflict, diagnosis is unknown"
    );
}

pub fn expert_registered(expert: &str, kind: &str, weight: f64) {
    tracing::info!(
        event = "expert_registered",
        expert = %expert,
        kind = %kind,
        weight = weight,
        "expert registered"
    );
}

pub fn expert_unregistered(expert: &str) {
    tracing::info!(
        event = "expert_unregistered",
        expert = %expert,
        "expert unregistered"
    );
}

pub fn weight_updated(expert: &str, previous: f64, weight: f64) {
    tracing::info!(
        event = "weight_updated",
        expert = %expert,
        previous = previous,
        weight = weight,
        "expert weight updated"
    );
}

pub fn conflict_penalty_changed(previous: f64, current: f64) {
    tracing::info!(
        event = "conflict_penalty_changed",
        previous = previous,
        current = current,
        "conflict penalty factor changed"
    );
}

/// Log the eviction of the oldest history entry.
pub fn history_evicted(diagnosis_id: &str, capacity: usize) {
    tracing::debug!(
        event = "history_evicted",
        diagnosis_id = %diagnosis_id,
        capacity = capacity,
        "history entry evicted"
    );
}

/// Log a history sink failure. The diagnosis itself still succeeds.
pub fn sink_failed(diagnosis_id: &str, error: &str) {
    tracing::warn!(
        event = "sink_failed",
        diagnosis_id = %diagnosis_id,
        error = %error,
        "history sink failed"
    );
}
