//! # Test Fixtures
//!
//! Session builders shared by the integration suites.

use cc_calculator::prelude::*;
use cc_harness::prelude::*;

/// Stub name used by every suite.
pub const STUB_NAME: &str = "CalcTestStub";

/// Starts a calculator session initialized to `initial`.
///
/// # Errors
///
/// Returns `HarnessError::InitFailed` if `Init` is rejected.
pub fn calc_session(initial: i64) -> Result<HarnessSession<CalcChaincode>, HarnessError> {
    calc_session_with(ChaincodeConfig::default(), initial)
}

/// Starts a calculator session with a custom configuration.
///
/// # Errors
///
/// Returns `HarnessError::InitFailed` if `Init` is rejected.
pub fn calc_session_with(
    config: ChaincodeConfig,
    initial: i64,
) -> Result<HarnessSession<CalcChaincode>, HarnessError> {
    cc_telemetry::init_test_tracing();
    tracing::debug!(initial, state_key = %config.state_key, "Starting calculator session");
    HarnessSession::initialize(
        STUB_NAME,
        CalcChaincode::new(config),
        encode_args("init", [initial.to_string()]),
    )
}

/// Value committed in the session's ledger, read directly from the store.
#[must_use]
pub fn stored_value(session: &HarnessSession<CalcChaincode>) -> Option<i64> {
    let key = &session.stub().chaincode().config().state_key;
    let bytes = session.stub().state(key).ok()?;
    LedgerValue::from_bytes(key, &bytes).ok().map(LedgerValue::get)
}
