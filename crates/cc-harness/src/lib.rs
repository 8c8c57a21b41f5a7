//! # CC-Harness - Invocation Harness
//!
//! **Role:** deterministic driver for verifying a chaincode.
//!
//! ## Purpose
//!
//! Builds a fresh chaincode + ledger pair behind a `MockStub`, runs `Init`,
//! then submits calls one at a time and checks each response against an
//! expected value. The first unexpected response aborts the run, since every
//! later step depends on the state the earlier ones committed.
//!
//! ## Failure Behaviour
//!
//! | Situation | Result |
//! |-----------|--------|
//! | `Init` not OK | `HarnessError::InitFailed`, no session |
//! | Non-OK where a value was expected | `HarnessError::UnexpectedStatus` |
//! | OK where a rejection was expected | `HarnessError::UnexpectedSuccess` |
//! | Payload differs from expected | `HarnessError::ValueMismatch` |
//! | OK payload is not a decimal integer | `HarnessError::MalformedPayload` |
//! | `FATAL` status, whatever was expected | `HarnessError::Fatal` |
//!
//! Every failure carries a `DiagnosticDump` of the call and is logged at
//! error level. Successful steps produce no dump.
//!
//! ## Usage Example
//!
//! ```ignore
//! use cc_harness::prelude::*;
//!
//! let mut session = HarnessSession::initialize(
//!     "CalcTestStub",
//!     CalcChaincode::default(),
//!     encode_args("init", ["100"]),
//! )?;
//! session.expect_value("TxAdd", encode_args("invoke", ["add", "10"]), 110)?;
//! session.expect_value("TxSubtract", encode_args("invoke", ["subtract", "20"]), 90)?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod dump;
pub mod errors;
pub mod scenario;
pub mod session;
pub mod verify;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::dump::{render_payload, DiagnosticDump};
    pub use crate::errors::HarnessError;
    pub use crate::scenario::{RunReport, Step};
    pub use crate::session::{HarnessSession, SessionStats, INIT_TX_ID};
    pub use crate::verify::{decode_payload, verify, Expectation};

    pub use cc_shim::domain::args::{encode_args, Transaction};
    pub use cc_shim::domain::response::Response;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
