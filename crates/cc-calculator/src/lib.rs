//! # CC-Calculator - Single-Value Ledger Chaincode
//!
//! **Role:** chaincode state machine hosted behind `cc-shim`.
//!
//! ## Purpose
//!
//! Holds one signed 64-bit integer in the ledger and mutates it with `add`
//! and `subtract` transactions. Each transaction is a single
//! read-modify-write of one key; the post-mutation value is returned as the
//! decimal payload.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Value present after successful `Init` | `service.rs` - `CalcChaincode::init` |
//! | Rejected call never mutates | `service.rs` - single `put_state` after all checks |
//! | Unknown keyword is exhaustive | `domain/operations.rs` - `Operation::from_keyword` |
//! | Overflow never wraps | `domain/operations.rs` - `Operation::apply` |
//!
//! ## Error Taxonomy
//!
//! | Error | Mutates | Session |
//! |-------|---------|---------|
//! | `Initialization` | no | fatal |
//! | `InvalidArgument` | no | continues |
//! | `UnknownOperation` | no | continues |
//! | `NotInitialized` | no | continues |
//! | `Overflow` | no | continues |
//! | `CorruptState` | no | fatal |
//!
//! ## Usage Example
//!
//! ```ignore
//! use cc_calculator::prelude::*;
//! use cc_shim::prelude::*;
//!
//! let mut stub = MockStub::new("CalcTestStub", CalcChaincode::default());
//! stub.mock_init("mockTxId", encode_args("init", ["100"]));
//! let response = stub.mock_invoke("TxAdd", encode_args("invoke", ["add", "10"]));
//! assert_eq!(response.payload, b"110");
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::config::{ChaincodeConfig, DEFAULT_STATE_KEY};

    pub use crate::domain::operations::{
        Command, Operation, OverflowPolicy, INVOKE_FUNCTION, QUERY_FUNCTION,
    };
    pub use crate::domain::value_objects::{LedgerValue, Operand};

    pub use crate::events::{topics, InitializedPayload, ValueChangedPayload};

    pub use crate::errors::CalcError;

    pub use crate::service::{CalcChaincode, Lifecycle};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Chaincode name.
pub const CHAINCODE_NAME: &str = "calc";
