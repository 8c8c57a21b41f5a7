//! # Calculator Flows
//!
//! End-to-end scenarios: Init, then a chain of `add`/`subtract` calls where
//! each step depends on the value the previous one committed.

use super::fixtures::{calc_session, calc_session_with, stored_value, STUB_NAME};
use cc_calculator::prelude::*;
use cc_harness::prelude::*;
use cc_shim::prelude::{ChaincodeEvent, MockStub};

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_scenario_add_after_init() {
    let mut session = calc_session(100).unwrap();

    let response = session
        .expect_value("TxAdd", encode_args("invoke", ["add", "10"]), 110)
        .unwrap();
    assert!(response.is_ok());
    assert_eq!(response.payload, b"110");
    assert!(response.message.is_empty());
}

#[test]
fn test_scenario_full_chain() {
    let mut session = calc_session(100).unwrap();
    let _span =
        cc_telemetry::chaincode_span!("scenario", chaincode = cc_calculator::CHAINCODE_NAME)
            .entered();

    // Scenario 1
    session
        .expect_value("TxAdd", encode_args("invoke", ["add", "10"]), 110)
        .unwrap();

    // Scenario 2
    session
        .expect_value("TxSubtract", encode_args("invoke", ["subtract", "20"]), 90)
        .unwrap();

    // Scenario 3
    let response = session
        .expect_failure("TxAddNaN", encode_args("invoke", ["add", "notanumber"]))
        .unwrap();
    assert!(!response.is_ok());
    assert!(response.payload.is_empty());
    assert_eq!(stored_value(&session), Some(90));

    // Scenario 4
    let response = session
        .expect_failure("TxMultiply", encode_args("invoke", ["multiply", "5"]))
        .unwrap();
    assert!(response.message.contains("multiply"));
    assert_eq!(stored_value(&session), Some(90));

    let stats = session.stats();
    assert_eq!(stats.submitted, 4);
    assert_eq!(stats.succeeded, 2);
    assert_eq!(stats.failed, 2);
}

#[test]
fn test_scenario_as_steps() {
    let mut session = calc_session(100).unwrap();
    let steps = vec![
        Step::expect_value("TxAdd", Transaction::new("invoke", ["add", "10"]), 110),
        Step::expect_value("TxSubtract", Transaction::new("invoke", ["subtract", "20"]), 90),
        Step::expect_failure("TxAddNaN", Transaction::new("invoke", ["add", "notanumber"])),
        Step::expect_failure("TxMultiply", Transaction::new("invoke", ["multiply", "5"])),
        Step::expect_value("TxQuery", Transaction::new("query", Vec::<String>::new()), 90),
    ];

    let report = session.run(&steps).unwrap();
    assert_eq!(report.steps_passed, 5);
    assert_eq!(report.last_value, Some(90));
}

#[test]
fn test_wrong_expectation_aborts_remaining_steps() {
    let mut session = calc_session(100).unwrap();
    let steps = vec![
        Step::expect_value("TxAdd", Transaction::new("invoke", ["add", "10"]), 120),
        Step::expect_value("TxSubtract", Transaction::new("invoke", ["subtract", "20"]), 100),
    ];

    let err = session.run(&steps).unwrap_err();
    let dump = err.dump();
    assert_eq!(dump.call, "invoke,add,10");
    assert_eq!(dump.status, cc_shim::prelude::OK);
    assert_eq!(dump.payload, "110");

    // The subtract step was never submitted
    assert_eq!(session.stats().submitted, 1);
    assert_eq!(stored_value(&session), Some(110));
}

// =============================================================================
// INITIALIZATION
// =============================================================================

#[test]
fn test_init_without_arguments_uses_configured_default() {
    // Original calculator flow: Init carries no arguments, the chaincode
    // starts from 100.
    let config = ChaincodeConfig::default().with_default_initial_value(100);
    let mut session =
        HarnessSession::initialize(STUB_NAME, CalcChaincode::new(config), Vec::new()).unwrap();

    session
        .expect_value("TxAdd", encode_args("invoke", ["add", "10"]), 110)
        .unwrap();
    session
        .expect_value("TxSubtract", encode_args("invoke", ["subtract", "20"]), 90)
        .unwrap();
}

#[test]
fn test_init_without_arguments_rejected_by_default() {
    let err = HarnessSession::initialize(STUB_NAME, CalcChaincode::default(), Vec::new())
        .err()
        .unwrap();
    let dump = err.dump();
    assert!(dump.message.contains("requires an initial value"));
}

#[test]
fn test_init_failure_on_read_only_ledger() {
    let err = HarnessSession::initialize_with_ledger(
        STUB_NAME,
        CalcChaincode::default(),
        cc_shim::prelude::InMemoryLedger::read_only(),
        encode_args("init", ["100"]),
    )
    .err()
    .unwrap();
    assert!(err.to_string().starts_with("initialization failed"));
    assert!(err.dump().message.contains("read-only"));
}

// =============================================================================
// BOUNDARY BEHAVIOUR
// =============================================================================

#[test]
fn test_direct_calling_convention() {
    let mut session = calc_session(0).unwrap();
    session
        .expect_value("TxAdd", encode_args("add", ["5"]), 5)
        .unwrap();
    session
        .expect_value("TxSubtract", encode_args("subtract", ["8"]), -3)
        .unwrap();
}

#[test]
fn test_overflow_rejected_without_mutation() {
    let mut session = calc_session(i64::MAX - 1).unwrap();
    let response = session
        .expect_failure("TxAdd", encode_args("invoke", ["add", "2"]))
        .unwrap();
    assert!(response.message.contains("overflows"));
    assert_eq!(stored_value(&session), Some(i64::MAX - 1));

    session
        .expect_value("TxAdd", encode_args("invoke", ["add", "1"]), i64::MAX)
        .unwrap();
}

#[test]
fn test_saturating_policy() {
    let config = ChaincodeConfig::default().with_overflow_policy(OverflowPolicy::Saturate);
    let mut session = calc_session_with(config, i64::MAX - 1).unwrap();
    session
        .expect_value("TxAdd", encode_args("invoke", ["add", "2"]), i64::MAX)
        .unwrap();
}

#[test]
fn test_events_follow_committed_transactions() {
    let mut stub = MockStub::new(STUB_NAME, CalcChaincode::default());
    stub.mock_init(INIT_TX_ID, encode_args("init", ["100"]));

    let event: &ChaincodeEvent = stub.last_event().unwrap();
    assert_eq!(event.name, topics::INITIALIZED);
    let payload: InitializedPayload = event.payload_json().unwrap();
    assert_eq!(payload.value.get(), 100);

    stub.mock_invoke("TxAdd", encode_args("invoke", ["add", "10"]));
    stub.mock_invoke("TxMultiply", encode_args("invoke", ["multiply", "5"]));

    let event = stub.last_event().unwrap();
    assert_eq!(event.tx_id, "TxAdd");
    let payload: serde_json::Value = event.payload_json().unwrap();
    assert_eq!(payload["operation"], "add");
    assert_eq!(payload["current"], 110);
}

#[test]
fn test_sessions_are_isolated() {
    let mut first = calc_session(100).unwrap();
    let second = calc_session(100).unwrap();

    first
        .expect_value("TxAdd", encode_args("invoke", ["add", "10"]), 110)
        .unwrap();
    assert_eq!(stored_value(&first), Some(110));
    assert_eq!(stored_value(&second), Some(100));
}
