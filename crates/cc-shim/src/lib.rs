//! # CC-Shim - Chaincode Invocation Boundary
//!
//! **Role:** the surface a chaincode is hosted behind.
//!
//! ## Purpose
//!
//! Defines the contract between a chaincode and the runtime that hosts it:
//! the driving port a chaincode implements (`Chaincode`), the driven ports it
//! calls back into (`ChaincodeStub`, `LedgerStore`), the wire `Response`
//! shape, and the argument codec that turns human-readable strings into the
//! byte-argument lists the boundary carries.
//!
//! `MockStub` stands in for the real host: it binds one chaincode to one
//! in-memory ledger and runs `Init`/`Invoke` calls synchronously, one at a
//! time, so a chaincode can be exercised without a network.
//!
//! ## Status Codes
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | `OK` | 200 | Call succeeded |
//! | `ERROR_THRESHOLD` | 400 | Lowest status treated as an error |
//! | `ERROR` | 500 | Call failed |
//! | `FATAL` | 503 | Call failed and the session cannot continue |
//!
//! Status codes exist only on this side of the boundary. Chaincodes return
//! `Result<Vec<u8>, E>` and `Response::from_result` does the encoding,
//! asking `Chaincode::is_fatal` which errors map to `FATAL`.
//!
//! ## Usage Example
//!
//! ```ignore
//! use cc_shim::prelude::*;
//!
//! let mut stub = MockStub::new("CalcTestStub", my_chaincode);
//! let response = stub.mock_init("mockTxId", encode_args("init", ["100"]));
//! assert!(response.is_ok());
//!
//! let response = stub.mock_invoke("TxAdd", encode_args("invoke", ["add", "10"]));
//! assert_eq!(response.payload, b"110");
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::args::{decode_args, encode_args, function_and_parameters, Transaction};
    pub use crate::domain::response::{Response, ERROR, ERROR_THRESHOLD, FATAL, OK};

    pub use crate::ports::inbound::Chaincode;
    pub use crate::ports::outbound::{ChaincodeStub, LedgerStore};

    pub use crate::events::ChaincodeEvent;
    pub use crate::errors::StoreError;

    pub use crate::adapters::{InMemoryLedger, MockStub};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
