//! # Event Schema
//!
//! Events the calculator attaches to committed transactions. Payloads are
//! JSON-encoded.
//!
//! | Event | Emitted by |
//! |-------|------------|
//! | `calc.initialized` | successful `Init` |
//! | `calc.value_changed` | successful `add` / `subtract` |

use crate::domain::operations::Operation;
use crate::domain::value_objects::{LedgerValue, Operand};
use serde::{Deserialize, Serialize};

/// Event names.
pub mod topics {
    /// Value set by `Init`.
    pub const INITIALIZED: &str = "calc.initialized";
    /// Value mutated by `Invoke`.
    pub const VALUE_CHANGED: &str = "calc.value_changed";
}

/// Payload of `calc.initialized`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializedPayload {
    /// Initial value.
    pub value: LedgerValue,
}

/// Payload of `calc.value_changed`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueChangedPayload {
    /// Applied operation.
    pub operation: Operation,
    /// Its operand.
    pub operand: Operand,
    /// Value before the transaction.
    pub previous: LedgerValue,
    /// Value after the transaction.
    pub current: LedgerValue,
}
