use serde::{Deserialize, Serialize};

use super::defaults;

/// In-memory diagnosis history settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Entries retained before the oldest is evicted. Default: 200.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_HISTORY_CAPACITY,
        }
    }
}
