use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diagnosis::DiagnosisResult;
use super::sensor::SensorSnapshot;

/// One recorded diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub input: SensorSnapshot,
    /// BLAKE3 fingerprint of `input`.
    pub input_fingerprint: String,
    pub result: DiagnosisResult,
    pub duration_ms: f64,
}

/// What `diagnose` hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    pub diagnosis_id: String,
    pub timestamp: DateTime<Utc>,
    pub duration_ms: f64,
    pub device_code: Option<String>,
    pub component: Option<String>,
    pub result: DiagnosisResult,
}

impl From<&HistoryEntry> for DiagnosisReport {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            diagnosis_id: entry.id.clone(),
            timestamp: entry.timestamp,
            duration_ms: entry.duration_ms,
            device_code: entry.input.device_code.clone(),
            component: entry.input.component.clone(),
            result: entry.result.clone(),
        }
    }
}

/// A page of history, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    /// Entries currently retained, independent of paging.
    pub total: usize,
    pub items: Vec<HistoryEntry>,
}
