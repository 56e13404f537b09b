//! DiagnosisHistoryStore — bounded, append-only record of diagnoses.
//!
//! When full, each accepted append evicts exactly the single oldest entry,
//! under the same lock as the append.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use faultfuse_core::models::HistoryPage;
use faultfuse_core::{FaultFuseError, FaultFuseResult, HistoryEntry};

use crate::tracing_setup::events;

#[derive(Debug)]
pub struct DiagnosisHistoryStore {
    entries: Mutex<VecDeque<HistoryEntry>>,
    capacity: usize,
}

impl DiagnosisHistoryStore {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> FaultFuseResult<MutexGuard<'_, VecDeque<HistoryEntry>>> {
        self.entries
            .lock()
            .map_err(|e| FaultFuseError::ConcurrencyError(format!("history lock poisoned: {e}")))
    }

    /// Append an entry, returning the evicted oldest entry if the store was full.
    pub fn append(&self, entry: HistoryEntry) -> FaultFuseResult<Option<HistoryEntry>> {
        let mut entries = self.lock()?;
        let evicted = if entries.len() >= self.capacity {
            entries.pop_front()
        } else {
            None
        };
        entries.push_back(entry);
        drop(entries);

        if let Some(old) = &evicted {
            events::history_evicted(&old.id, self.capacity);
        }
        Ok(evicted)
    }

    /// Entries newest first, skipping `offset` and returning at most `limit`.
    pub fn page(&self, limit: usize, offset: usize) -> FaultFuseResult<HistoryPage> {
        let entries = self.lock()?;
        Ok(HistoryPage {
            total: entries.len(),
            items: entries.iter().rev().skip(offset).take(limit).cloned().collect(),
        })
    }

    /// Look up one entry by diagnosis id.
    pub fn get(&self, id: &str) -> FaultFuseResult<Option<HistoryEntry>> {
        Ok(self.lock()?.iter().find(|e| e.id == id).cloned())
    }

    pub fn len(&self) -> FaultFuseResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> FaultFuseResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Drop every entry and return how many there were.
    pub fn clear(&self) -> FaultFuseResult<usize> {
        let mut entries = self.lock()?;
        let n = entries.len();
        entries.clear();
        Ok(n)
    }
}
