//! # Error Types
//!
//! Errors raised by the ledger side of the boundary.

use thiserror::Error;

/// Errors from ledger state access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No value has been written under the key.
    #[error("no state stored under key '{key}'")]
    Absent {
        /// Key that was read.
        key: String,
    },

    /// The ledger refused the write.
    #[error("failed to write key '{key}': {reason}")]
    Write {
        /// Key that was written.
        key: String,
        /// Why the write was rejected.
        reason: String,
    },

    /// Event could not be attached to the transaction.
    #[error("invalid event: {0}")]
    InvalidEvent(String),
}

impl StoreError {
    /// Returns true if the key was simply never written.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent { .. })
    }
}
