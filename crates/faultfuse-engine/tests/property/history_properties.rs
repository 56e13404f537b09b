use chrono::Utc;
use faultfuse_core::{DiagnosisResult, HistoryEntry, SensorSnapshot};
use faultfuse_engine::DiagnosisHistoryStore;
use proptest::prelude::*;

fn entry(n: usize) -> HistoryEntry {
    HistoryEntry {
        id: n.to_string(),
        timestamp: Utc::now(),
        input: SensorSnapshot::new(),
        input_fingerprint: String::new(),
        result: DiagnosisResult::undiagnosable(Vec::new(), Vec::new()),
        duration_ms: 0.0,
    }
}

proptest! {
    #[test]
    fn store_keeps_the_newest_entries_up_to_capacity(capacity in 1usize..32, appends in 0usize..100) {
        let store = DiagnosisHistoryStore::new(capacity);
        let mut evictions = 0;
        for n in 0..appends {
            if let Some(old) = store.append(entry(n)).unwrap() {
                prop_assert_eq!(old.id, evictions.to_string());
                evictions += 1;
            }
        }

        let kept = appends.min(capacity);
        prop_assert_eq!(store.len().unwrap(), kept);
        prop_assert_eq!(evictions, appends - kept);

        let page = store.page(usize::MAX, 0).unwrap();
        let expected: Vec<String> = (appends - kept..appends).rev().map(|n| n.to_string()).collect();
        let got: Vec<String> = page.items.into_iter().map(|e| e.id).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn paging_partitions_the_history(total in 0usize..40, limit in 1usize..10) {
        let store = DiagnosisHistoryStore::new(64);
        for n in 0..total {
            store.append(entry(n)).unwrap();
        }
        let mut seen = Vec::new();
        let mut offset = 0;
        loop {
            let page = store.page(limit, offset).unwrap();
            prop_assert_eq!(page.total, total);
            if page.items.is_empty() {
                break;
            }
            prop_assert!(page.items.len() <= limit);
            offset += page.items.len();
            seen.extend(page.items.into_iter().map(|e| e.id));
        }
        prop_assert_eq!(seen.len(), total);
    }
}
