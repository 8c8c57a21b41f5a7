//! # Error Types
//!
//! All error types for the calculator chaincode.

use crate::domain::operations::Operation;
use cc_shim::errors::StoreError;
use thiserror::Error;

/// Errors returned by `Init` and `Invoke`.
///
/// Every variant except `Initialization` and `CorruptState` leaves the
/// ledger untouched and the session usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Initial state could not be written. The session is unusable.
    #[error("initialization failed: {0}")]
    Initialization(#[source] StoreError),

    /// Malformed operand or wrong number of arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation keyword is not recognised.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// `Invoke` was called before a successful `Init`.
    #[error("chaincode not initialized: no value under key '{key}'")]
    NotInitialized {
        /// State key that was missing.
        key: String,
    },

    /// Stored value is not a decimal integer.
    #[error("corrupt state under key '{key}': {raw:?}")]
    CorruptState {
        /// State key.
        key: String,
        /// Stored bytes, lossily decoded.
        raw: String,
    },

    /// Result does not fit in a signed 64-bit integer.
    #[error("{operation} {operand} on {current} overflows")]
    Overflow {
        /// Operation that overflowed.
        operation: Operation,
        /// Value before the operation.
        current: i64,
        /// Operand.
        operand: i64,
    },

    /// Ledger access failed during `Invoke`.
    #[error("state error: {0}")]
    Store(#[from] StoreError),
}

impl CalcError {
    /// Returns true if the session cannot continue after this error.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Initialization(_) | Self::CorruptState { .. })
    }
}
