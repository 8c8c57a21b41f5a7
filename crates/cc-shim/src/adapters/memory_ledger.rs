//! # In-Memory Ledger
//!
//! `LedgerStore` backed by an ordered map. Lives for one session only.

use crate::errors::StoreError;
use crate::ports::outbound::LedgerStore;
use std::collections::BTreeMap;

/// In-memory ledger with sorted keys.
#[derive(Debug, Clone)]
pub struct InMemoryLedger {
    state: BTreeMap<String, Vec<u8>>,
    writable: bool,
}

impl InMemoryLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: BTreeMap::new(),
            writable: true,
        }
    }

    /// Create a ledger that rejects every write.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            state: BTreeMap::new(),
            writable: false,
        }
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.state.keys().map(String::as_str)
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryLedger {
    fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.state.get(key).cloned().ok_or_else(|| StoreError::Absent {
            key: key.to_string(),
        })
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        if !self.writable {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "ledger is read-only".to_string(),
            });
        }
        if key.is_empty() {
            return Err(StoreError::Write {
                key: String::new(),
                reason: "key must not be empty".to_string(),
            });
        }
        self.state.insert(key.to_string(), value);
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.state.contains_key(key)
    }
}
