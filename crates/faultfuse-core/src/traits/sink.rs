use crate::errors::FaultFuseResult;
use crate::models::HistoryEntry;

/// External persistence for diagnosis history beyond process lifetime.
///
/// The engine hands every entry to the sink just before the in-memory
/// append. Sink failures are logged and never fail a diagnosis.
pub trait HistorySink: Send + Sync {
    fn persist(&self, entry: &HistoryEntry) -> FaultFuseResult<()>;
}
