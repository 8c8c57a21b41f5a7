//! # Value Objects
//!
//! The stored value and the operands applied to it.

use crate::errors::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// LEDGER VALUE
// =============================================================================

/// The single signed integer the chaincode keeps in the ledger.
///
/// Stored as its decimal ASCII rendering, which is also the success payload.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LedgerValue(pub i64);

impl LedgerValue {
    /// Wraps a raw integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Decimal ASCII encoding.
    #[must_use]
    pub fn to_bytes(self) -> Vec<u8> {
        self.0.to_string().into_bytes()
    }

    /// Decodes bytes read from the ledger under `key`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::CorruptState` if the bytes are not a decimal integer.
    pub fn from_bytes(key: &str, bytes: &[u8]) -> Result<Self, CalcError> {
        std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .map(Self)
            .ok_or_else(|| CalcError::CorruptState {
                key: key.to_string(),
                raw: String::from_utf8_lossy(bytes).into_owned(),
            })
    }

    /// Parses a caller-supplied initial value.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidArgument` if `s` is not a decimal integer.
    pub fn parse(s: &str) -> Result<Self, CalcError> {
        s.parse::<i64>().map(Self).map_err(|e| {
            CalcError::InvalidArgument(format!("initial value '{s}' is not an integer: {e}"))
        })
    }
}

impl fmt::Display for LedgerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for LedgerValue {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

// =============================================================================
// OPERAND
// =============================================================================

/// Decimal operand of an arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operand(pub i64);

impl Operand {
    /// The raw integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Parses a decimal operand. Surrounding whitespace is not accepted.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidArgument` if `s` is not a decimal integer.
    pub fn parse(s: &str) -> Result<Self, CalcError> {
        s.parse::<i64>().map(Self).map_err(|e| {
            CalcError::InvalidArgument(format!("operand '{s}' is not an integer: {e}"))
        })
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
