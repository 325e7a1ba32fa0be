// src/services/history.rs
use chrono::Local;
use log::{debug, info, warn};
use thiserror::Error;

use crate::models::{HistoryEntry, HistoryField};
use super::store::{KeyValueStore, StoreError};

pub const DEFAULT_HISTORY_KEY: &str = "calculatorHistory";
pub const DEFAULT_MAX_ENTRIES: usize = 100;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Failed to persist history: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Current local time in the en-US `toLocaleString` shape, e.g. `10/14/2026, 3:04:05 PM`.
pub fn timestamp_now() -> String {
    Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Newest-first calculation log persisted as one JSON array under a single key.
pub struct HistoryLedger<S: KeyValueStore> {
    store: S,
    key: String,
    max_entries: Option<usize>,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryLedger<S> {
    /// Opens the ledger with the default key and retention cap and loads it.
    pub fn new(store: S) -> Self {
        Self::with_options(store, DEFAULT_HISTORY_KEY, Some(DEFAULT_MAX_ENTRIES))
    }

    /// `max_entries` of `None` or `Some(0)` keeps every entry.
    pub fn with_options(store: S, key: impl Into<String>, max_entries: Option<usize>) -> Self {
        let mut ledger = HistoryLedger {
            store,
            key: key.into(),
            max_entries: max_entries.filter(|cap| *cap > 0),
            entries: Vec::new(),
        };
        ledger.load();
        ledger
    }

    /// Replaces the in-memory entries with the persisted ones, trimmed to the
    /// retention cap. A missing, unreadable or corrupt blob leaves the ledger empty.
    pub fn load(&mut self) -> &[HistoryEntry] {
        self.entries = match self.store.get(&self.key) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<HistoryEntry>>(&blob) {
                Ok(entries) => {
                    info!("Loaded {} history entries from '{}'", entries.len(), self.key);
                    entries
                }
                Err(e) => {
                    warn!("Discarding unparseable history under '{}': {}", self.key, e);
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No persisted history under '{}'", self.key);
                Vec::new()
            }
            Err(e) => {
                warn!("History storage unavailable, starting empty: {}", e);
                Vec::new()
            }
        };
        self.enforce_cap();
        &self.entries
    }

    /// Records a calculation stamped with the current local time.
    pub fn append(&mut self, calculator: &str, fields: Vec<HistoryField>) -> Result<(), LedgerError> {
        self.append_entry(HistoryEntry {
            calculator: calculator.to_string(),
            timestamp: timestamp_now(),
            fields,
        })
    }

    /// The entry stays in memory even when persisting it fails.
    pub fn append_entry(&mut self, entry: HistoryEntry) -> Result<(), LedgerError> {
        debug!("Appending '{}' entry to history", entry.calculator);
        self.entries.insert(0, entry);
        self.enforce_cap();
        self.persist()
    }

    /// Memory is only emptied once the stored blob is gone.
    pub fn clear(&mut self) -> Result<(), LedgerError> {
        info!("Clearing {} history entries", self.entries.len());
        self.store.remove(&self.key)?;
        self.entries.clear();
        Ok(())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    fn enforce_cap(&mut self) {
        if let Some(cap) = self.max_entries {
            if self.entries.len() > cap {
                debug!("Evicting {} oldest history entries", self.entries.len() - cap);
                self.entries.truncate(cap);
            }
        }
    }

    fn persist(&self) -> Result<(), LedgerError> {
        let blob = serde_json::to_string(&self.entries)?;
        self.store.set(&self.key, &blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::{MemoryStore, Result as StoreResult};

    fn entry(calculator: &str, n: usize) -> HistoryEntry {
        HistoryEntry {
            calculator: calculator.to_string(),
            timestamp: format!("1/{}/2026, 9:00:00 AM", n),
            fields: vec![HistoryField::new("Principal", format!("${}.00", n))],
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Unavailable("disk gone".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable("disk gone".to_string()))
        }

        fn remove(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable("disk gone".to_string()))
        }
    }

    /// Reads and writes work; removing the blob fails.
    #[derive(Clone, Default)]
    struct FlakyRemoveStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for FlakyRemoveStore {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> StoreResult<()> {
            self.inner.set(key, value)
        }

        fn remove(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable("read-only volume".to_string()))
        }
    }

    #[test]
    fn append_is_newest_first_and_survives_reload() {
        let store = MemoryStore::new();
        let mut ledger = HistoryLedger::new(store.clone());
        ledger.append_entry(entry("Simple Interest", 1)).unwrap();
        ledger.append_entry(entry("EMI Calculator", 2)).unwrap();

        let reopened = HistoryLedger::new(store);
        let calculators: Vec<&str> = reopened.entries().iter().map(|e| e.calculator.as_str()).collect();
        assert_eq!(calculators, ["EMI Calculator", "Simple Interest"]);
        assert_eq!(reopened.entries()[1], entry("Simple Interest", 1));
    }

    #[test]
    fn clear_removes_the_blob() {
        let store = MemoryStore::new();
        let mut ledger = HistoryLedger::new(store.clone());
        ledger.append("Fixed Deposit", vec![]).unwrap();
        ledger.clear().unwrap();

        assert!(ledger.is_empty());
        assert_eq!(store.get(DEFAULT_HISTORY_KEY).unwrap(), None);
        assert!(ledger.load().is_empty());
    }

    #[test]
    fn retention_cap_evicts_oldest() {
        let mut ledger = HistoryLedger::with_options(MemoryStore::new(), "h", Some(3));
        for n in 1..=5 {
            ledger.append_entry(entry("SIP Calculator", n)).unwrap();
        }

        let stamps: Vec<&str> = ledger.entries().iter().map(|e| e.timestamp.as_str()).collect();
        assert_eq!(
            stamps,
            ["1/5/2026, 9:00:00 AM", "1/4/2026, 9:00:00 AM", "1/3/2026, 9:00:00 AM"]
        );
    }

    #[test]
    fn zero_cap_means_unbounded() {
        let mut ledger = HistoryLedger::with_options(MemoryStore::new(), "h", Some(0));
        assert_eq!(ledger.max_entries(), None);
        for n in 0..150 {
            ledger.append_entry(entry("Inflation Calculator", n)).unwrap();
        }
        assert_eq!(ledger.len(), 150);
    }

    #[test]
    fn corrupt_blob_loads_empty_and_is_overwritten() {
        let store = MemoryStore::new();
        store.set(DEFAULT_HISTORY_KEY, "<div class=\"history-item\">").unwrap();

        let mut ledger = HistoryLedger::new(store.clone());
        assert!(ledger.is_empty());

        ledger.append_entry(entry("Recurring Deposit", 1)).unwrap();
        let blob = store.get(DEFAULT_HISTORY_KEY).unwrap().unwrap();
        let persisted: Vec<HistoryEntry> = serde_json::from_str(&blob).unwrap();
        assert_eq!(persisted, vec![entry("Recurring Deposit", 1)]);
    }

    #[test]
    fn storage_failures_are_reported_not_fatal() {
        let mut ledger = HistoryLedger::new(BrokenStore);
        assert!(ledger.is_empty());

        let err = ledger.append_entry(entry("Compound Interest", 1)).unwrap_err();
        assert!(matches!(err, LedgerError::Store(_)));
        assert_eq!(ledger.len(), 1);

        assert!(ledger.clear().is_err());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn failed_clear_keeps_memory_and_blob_in_step() {
        let store = FlakyRemoveStore::default();
        let mut ledger = HistoryLedger::new(store.clone());
        ledger.append_entry(entry("Fixed Deposit", 1)).unwrap();

        assert!(matches!(ledger.clear(), Err(LedgerError::Store(_))));
        assert_eq!(ledger.len(), 1);
        assert_eq!(HistoryLedger::new(store).entries(), ledger.entries());
    }

    #[test]
    fn load_applies_retention_cap() {
        let store = MemoryStore::new();
        let mut unbounded = HistoryLedger::with_options(store.clone(), "h", None);
        for n in 1..=5 {
            unbounded.append_entry(entry("EMI Calculator", n)).unwrap();
        }

        let capped = HistoryLedger::with_options(store, "h", Some(2));
        assert_eq!(capped.len(), 2);
        assert_eq!(capped.entries()[0], entry("EMI Calculator", 5));
        assert_eq!(capped.entries()[1], entry("EMI Calculator", 4));
    }

    #[test]
    fn append_stamps_local_time() {
        let mut ledger = HistoryLedger::new(MemoryStore::new());
        ledger
            .append("Simple Interest", vec![HistoryField::new("Principal", "$1.00")])
            .unwrap();

        let stamp = &ledger.entries()[0].timestamp;
        assert!(stamp.contains(", "));
        assert!(stamp.ends_with("AM") || stamp.ends_with("PM"));
    }
}
