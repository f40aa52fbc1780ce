use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::LedgerError;
use crate::traits::LedgerState;

/// An in-memory `LedgerState` backend.
///
/// Backs the contract crate's tests and embedders that have no platform
/// ledger. Every call completes immediately; the `Mutex` is held only for
/// the duration of one map operation, never across an await point.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored. Test helper.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, Vec<u8>>>, LedgerError> {
        self.entries
            .lock()
            .map_err(|_| LedgerError::Backend("memory ledger lock poisoned".to_string()))
    }
}

#[async_trait]
impl LedgerState for MemoryLedger {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn put_state(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.lock()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete_state(&self, key: &str) -> Result<(), LedgerError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conformance::run_conformance_suite;

    #[tokio::test]
    async fn memory_ledger_passes_conformance() {
        let report = run_conformance_suite(|| async { MemoryLedger::new() }).await;
        assert_eq!(report.failed, 0, "{report}");
    }

    #[tokio::test]
    async fn len_tracks_puts_and_deletes() {
        let ledger = MemoryLedger::new();
        assert!(ledger.is_empty());
        ledger.put_state("a", b"1").await.unwrap();
        ledger.put_state("b", b"2").await.unwrap();
        assert_eq!(ledger.len(), 2);
        ledger.delete_state("a").await.unwrap();
        assert_eq!(ledger.len(), 1);
    }
}
