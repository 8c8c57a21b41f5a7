//! # Error Types
//!
//! Verification failures. Each carries the diagnostic dump of the call that
//! failed.

use crate::dump::DiagnosticDump;
use thiserror::Error;

/// Errors that abort a harness run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// `Init` did not return OK. The session was never usable.
    #[error("initialization failed\n{dump}")]
    InitFailed {
        /// Init call and its response.
        dump: Box<DiagnosticDump>,
    },

    /// A call expected to succeed returned a non-OK status.
    #[error("{label}: unexpected status\n{dump}")]
    UnexpectedStatus {
        /// Step label.
        label: String,
        /// Call and response.
        dump: Box<DiagnosticDump>,
    },

    /// A call expected to be rejected succeeded.
    #[error("{label}: expected rejection, call succeeded\n{dump}")]
    UnexpectedSuccess {
        /// Step label.
        label: String,
        /// Call and response.
        dump: Box<DiagnosticDump>,
    },

    /// Payload decoded to a different value than expected.
    #[error("{label}: expected {expected}, got {actual}\n{dump}")]
    ValueMismatch {
        /// Step label.
        label: String,
        /// Expected value.
        expected: i64,
        /// Decoded payload.
        actual: i64,
        /// Call and response.
        dump: Box<DiagnosticDump>,
    },

    /// Success payload is not a decimal integer.
    #[error("{label}: payload is not a decimal integer\n{dump}")]
    MalformedPayload {
        /// Step label.
        label: String,
        /// Call and response.
        dump: Box<DiagnosticDump>,
    },

    /// The chaincode reported a failure it cannot recover from. Aborts the
    /// run even where a rejection was expected.
    #[error("{label}: fatal chaincode failure\n{dump}")]
    Fatal {
        /// Step label.
        label: String,
        /// Call and response.
        dump: Box<DiagnosticDump>,
    },
}

impl HarnessError {
    /// The dump of the failing call.
    #[must_use]
    pub fn dump(&self) -> &DiagnosticDump {
        match self {
            Self::InitFailed { dump }
            | Self::UnexpectedStatus { dump, .. }
            | Self::UnexpectedSuccess { dump, .. }
            | Self::ValueMismatch { dump, .. }
            | Self::MalformedPayload { dump, .. }
            | Self::Fatal { dump, .. } => dump,
        }
    }
}
