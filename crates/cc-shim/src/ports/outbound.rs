//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the chaincode calls back into:
//! - `ChaincodeStub`: per-transaction view of arguments, state and events
//! - `LedgerStore`: the key/value store behind the stub

use crate::domain::args::{decode_args, function_and_parameters};
use crate::errors::StoreError;

// =============================================================================
// LEDGER STORE
// =============================================================================

/// Key/value store holding committed chaincode state.
///
/// A `put` must be visible to the next `get` of the same key. There is a
/// single writer, so nothing stronger is required.
pub trait LedgerStore {
    /// Reads the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Absent` if the key was never written.
    fn get(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Writes `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the store rejects the write.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Returns true if a value is stored under `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }
}

// =============================================================================
// CHAINCODE STUB
// =============================================================================

/// The chaincode's handle on the transaction it is executing.
///
/// A stub only exists for the duration of one `Init`/`Invoke` call, so
/// every state access is tied to a transaction.
pub trait ChaincodeStub {
    /// Identifier of the current transaction.
    fn tx_id(&self) -> &str;

    /// Raw byte arguments, function name first.
    fn args(&self) -> &[Vec<u8>];

    /// Reads ledger state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Absent` if nothing is stored under `key`.
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Writes ledger state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the ledger rejects the write.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Attaches an event to the transaction. A later call replaces it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidEvent` if `name` is empty.
    fn set_event(&mut self, name: &str, payload: Vec<u8>) -> Result<(), StoreError>;

    /// Arguments as strings.
    fn string_args(&self) -> Vec<String> {
        decode_args(self.args())
    }

    /// Function name and its parameters.
    fn function_and_parameters(&self) -> (String, Vec<String>) {
        function_and_parameters(self.args())
    }
}
