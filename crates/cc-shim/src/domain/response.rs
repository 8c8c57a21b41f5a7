//! # Response
//!
//! The structured result every `Init`/`Invoke` call returns across the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Status of a successful call.
pub const OK: i32 = 200;

/// Lowest status that counts as an error.
pub const ERROR_THRESHOLD: i32 = 400;

/// Status of a failed call.
pub const ERROR: i32 = 500;

/// Status of a failed call after which the session cannot continue.
pub const FATAL: i32 = 503;

/// Wire response of a chaincode call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Status code (`OK` on success).
    pub status: i32,
    /// Human-readable message. Empty on success.
    pub message: String,
    /// Result bytes. Empty on failure.
    pub payload: Vec<u8>,
}

impl Response {
    /// Successful response carrying `payload`.
    #[must_use]
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: OK,
            message: String::new(),
            payload,
        }
    }

    /// Failed response carrying `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Failed response that ends the session.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            status: FATAL,
            ..Self::error(message)
        }
    }

    /// Encodes a chaincode result. Errors for which `is_fatal` holds are
    /// encoded with `FATAL`, all others with `ERROR`.
    pub fn from_result<E: Display>(
        result: Result<Vec<u8>, E>,
        is_fatal: impl FnOnce(&E) -> bool,
    ) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(e) if is_fatal(&e) => Self::fatal(e.to_string()),
            Err(e) => Self::error(e.to_string()),
        }
    }

    /// Returns true if the status is `OK`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == OK
    }

    /// Returns true if the status is at or above `ERROR_THRESHOLD`.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status >= ERROR_THRESHOLD
    }

    /// Returns true if the status is `FATAL`.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.status == FATAL
    }
}
