//! # Harness Session
//!
//! Binds one chaincode to one ledger through a `MockStub` for the lifetime
//! of a verification run. Calls are applied strictly in submission order.

use crate::dump::DiagnosticDump;
use crate::errors::HarnessError;
use crate::scenario::{RunReport, Step};
use crate::verify::{verify, Expectation};
use cc_shim::adapters::{InMemoryLedger, MockStub};
use cc_shim::domain::args::Transaction;
use cc_shim::domain::response::Response;
use cc_shim::ports::{Chaincode, LedgerStore};
use tracing::{error, info, instrument};
use uuid::Uuid;

/// Transaction id used for the session's `Init` call.
pub const INIT_TX_ID: &str = "mockTxId";

/// Counters for a session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// Calls submitted after `Init`.
    pub submitted: u64,
    /// Calls that returned OK.
    pub succeeded: u64,
    /// Calls that returned a non-OK status.
    pub failed: u64,
}

/// A verification session over one chaincode and one ledger.
pub struct HarnessSession<C: Chaincode, L: LedgerStore = InMemoryLedger> {
    id: Uuid,
    stub: MockStub<C, L>,
    stats: SessionStats,
}

impl<C: Chaincode> HarnessSession<C> {
    /// Creates a session over a fresh in-memory ledger and runs `Init`.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::InitFailed` if `Init` does not return OK. No
    /// session is produced in that case.
    pub fn initialize(
        name: &str,
        chaincode: C,
        init_args: Vec<Vec<u8>>,
    ) -> Result<Self, HarnessError> {
        Self::initialize_with_ledger(name, chaincode, InMemoryLedger::new(), init_args)
    }
}

impl<C: Chaincode, L: LedgerStore> HarnessSession<C, L> {
    /// Creates a session over `ledger` and runs `Init`.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::InitFailed` if `Init` does not return OK.
    pub fn initialize_with_ledger(
        name: &str,
        chaincode: C,
        ledger: L,
        init_args: Vec<Vec<u8>>,
    ) -> Result<Self, HarnessError> {
        let id = Uuid::new_v4();
        let mut stub = MockStub::with_ledger(name, chaincode, ledger);
        let response = stub.mock_init(INIT_TX_ID, init_args.clone());

        info!(session = %id, stub = name, status = response.status, "Received init status");
        if !response.is_ok() {
            let dump = DiagnosticDump::new(&init_args, &response);
            error!(session = %id, "Initialization failed\n{dump}");
            return Err(HarnessError::InitFailed {
                dump: Box::new(dump),
            });
        }

        Ok(Self {
            id,
            stub,
            stats: SessionStats::default(),
        })
    }

    /// Submits a call and returns its response unchanged.
    #[instrument(skip(self, args), fields(session = %self.id))]
    pub fn submit(&mut self, label: &str, args: Vec<Vec<u8>>) -> Response {
        let response = self.stub.mock_invoke(label, args);
        self.stats.submitted += 1;
        if response.is_ok() {
            self.stats.succeeded += 1;
        } else {
            self.stats.failed += 1;
        }
        response
    }

    /// Submits an encoded `Transaction`.
    pub fn submit_transaction(&mut self, label: &str, transaction: &Transaction) -> Response {
        self.submit(label, transaction.encode())
    }

    /// Submits a call that must succeed with `expected` as payload.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedStatus`, `ValueMismatch`, `MalformedPayload` or
    /// `Fatal`. The diagnostic dump is logged before returning.
    pub fn expect_value(
        &mut self,
        label: &str,
        args: Vec<Vec<u8>>,
        expected: i64,
    ) -> Result<Response, HarnessError> {
        self.submit_checked(label, args, Expectation::Value(expected))
    }

    /// Submits a call that must be rejected.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedSuccess` if the call returned OK, or `Fatal` if the
    /// chaincode failed in a way the session cannot continue from.
    pub fn expect_failure(
        &mut self,
        label: &str,
        args: Vec<Vec<u8>>,
    ) -> Result<Response, HarnessError> {
        self.submit_checked(label, args, Expectation::Failure)
    }

    fn submit_checked(
        &mut self,
        label: &str,
        args: Vec<Vec<u8>>,
        expectation: Expectation,
    ) -> Result<Response, HarnessError> {
        let response = self.submit(label, args.clone());
        if let Err(e) = verify(label, &args, &response, expectation) {
            error!(session = %self.id, "{e}");
            return Err(e);
        }
        Ok(response)
    }

    /// Runs `steps` in order, stopping at the first failed step.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failed step; later steps are not
    /// submitted. A `FATAL` response fails its step even when the step
    /// expects a rejection.
    pub fn run(&mut self, steps: &[Step]) -> Result<RunReport, HarnessError> {
        let mut report = RunReport::default();
        for step in steps {
            self.submit_checked(&step.label, step.transaction.encode(), step.expectation)?;
            if let Expectation::Value(value) = step.expectation {
                report.last_value = Some(value);
            }
            report.steps_passed += 1;
        }
        info!(session = %self.id, steps = report.steps_passed, "Run completed");
        Ok(report)
    }

    /// Session identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Session counters.
    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// The underlying stub, for state inspection.
    #[must_use]
    pub fn stub(&self) -> &MockStub<C, L> {
        &self.stub
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cc_calculator::prelude::*;
    use cc_shim::domain::args::encode_args;
    use cc_shim::errors::StoreError;

    fn session() -> HarnessSession<CalcChaincode> {
        HarnessSession::initialize(
            "CalcTestStub",
            CalcChaincode::default(),
            encode_args("init", ["100"]),
        )
        .unwrap()
    }

    #[test]
    fn test_initialize_ok() {
        let session = session();
        assert_eq!(session.stub().state("value").unwrap(), b"100");
        assert_eq!(session.stats(), &SessionStats::default());
    }

    #[test]
    fn test_initialize_fails_fast() {
        let result = HarnessSession::initialize(
            "CalcTestStub",
            CalcChaincode::default(),
            encode_args("init", ["abc"]),
        );
        let err = result.err().unwrap();
        assert!(matches!(err, HarnessError::InitFailed { .. }));
        assert_eq!(err.dump().call, "init,abc");
    }

    #[test]
    fn test_initialize_read_only_ledger() {
        let result = HarnessSession::initialize_with_ledger(
            "CalcTestStub",
            CalcChaincode::default(),
            InMemoryLedger::read_only(),
            encode_args("init", ["100"]),
        );
        assert!(matches!(result, Err(HarnessError::InitFailed { .. })));
    }

    #[test]
    fn test_submit_returns_response_verbatim() {
        let mut session = session();
        let response = session.submit("TxMul", encode_args("invoke", ["multiply", "5"]));
        assert_eq!(response.status, cc_shim::domain::response::ERROR);
        assert_eq!(response.message, "unknown operation 'multiply'");
        assert_eq!(session.stats().failed, 1);
    }

    #[test]
    fn test_expect_value_and_failure() {
        let mut session = session();
        session
            .expect_value("TxAdd", encode_args("invoke", ["add", "10"]), 110)
            .unwrap();
        session
            .expect_failure("TxBad", encode_args("invoke", ["add", "notanumber"]))
            .unwrap();

        let err = session
            .expect_value("TxSubtract", encode_args("invoke", ["subtract", "20"]), 91)
            .unwrap_err();
        assert!(matches!(
            err,
            HarnessError::ValueMismatch {
                expected: 91,
                actual: 90,
                ..
            }
        ));

        let stats = session.stats();
        assert_eq!(stats.submitted, 3);
        assert_eq!(stats.succeeded, 2);
        assert_eq!(stats.failed, 1);
    }

    #[test]
    fn test_run_stops_at_first_failure() {
        let mut session = session();
        let steps = vec![
            Step::expect_value("TxAdd", Transaction::new("invoke", ["add", "10"]), 111),
            Step::expect_value("TxSubtract", Transaction::new("invoke", ["subtract", "20"]), 90),
        ];
        let err = session.run(&steps).unwrap_err();
        assert!(matches!(err, HarnessError::ValueMismatch { .. }));
        assert_eq!(session.stats().submitted, 1);
        assert_eq!(session.stub().state("value").unwrap(), b"110");
    }

    #[test]
    fn test_run_report() {
        let mut session = session();
        let steps = vec![
            Step::expect_value("TxAdd", Transaction::new("invoke", ["add", "10"]), 110),
            Step::expect_failure("TxMul", Transaction::new("invoke", ["multiply", "5"])),
            Step::expect_value("TxSubtract", Transaction::new("invoke", ["subtract", "20"]), 90),
        ];
        let report = session.run(&steps).unwrap();
        assert_eq!(report.steps_passed, 3);
        assert_eq!(report.last_value, Some(90));
    }

    // Delegates to an in-memory ledger but overwrites the value with
    // `garbage` on the given put.
    struct CorruptingLedger {
        inner: InMemoryLedger,
        puts: u32,
        corrupt_on: u32,
    }

    impl LedgerStore for CorruptingLedger {
        fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
            self.inner.get(key)
        }

        fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
            self.puts += 1;
            if self.puts == self.corrupt_on {
                return self.inner.put(key, b"garbage".to_vec());
            }
            self.inner.put(key, value)
        }
    }

    #[test]
    fn test_run_aborts_on_corrupt_state() {
        let ledger = CorruptingLedger {
            inner: InMemoryLedger::new(),
            puts: 0,
            corrupt_on: 2,
        };
        let mut session = HarnessSession::initialize_with_ledger(
            "CalcTestStub",
            CalcChaincode::default(),
            ledger,
            encode_args("init", ["100"]),
        )
        .unwrap();

        let steps = vec![
            Step::expect_value("TxAdd", Transaction::new("invoke", ["add", "10"]), 110),
            Step::expect_failure("TxAddOne", Transaction::new("invoke", ["add", "1"])),
            Step::expect_failure("TxSubtractOne", Transaction::new("invoke", ["subtract", "1"])),
        ];
        let err = session.run(&steps).unwrap_err();

        assert!(matches!(err, HarnessError::Fatal { ref label, .. } if label == "TxAddOne"));
        assert_eq!(err.dump().status, cc_shim::domain::response::FATAL);
        assert!(err.dump().message.contains("corrupt state"));
        assert_eq!(session.stats().submitted, 2);
        assert_eq!(session.stats().failed, 1);
    }

    #[test]
    fn test_malformed_payload_reports_dump() {
        struct TextChaincode;

        impl Chaincode for TextChaincode {
            type Error = StoreError;

            fn init(
                &self,
                _stub: &mut dyn cc_shim::ports::ChaincodeStub,
            ) -> Result<Vec<u8>, Self::Error> {
                Ok(Vec::new())
            }

            fn invoke(
                &self,
                _stub: &mut dyn cc_shim::ports::ChaincodeStub,
            ) -> Result<Vec<u8>, Self::Error> {
                Ok(b"abc".to_vec())
            }
        }

        let mut session =
            HarnessSession::initialize("TextStub", TextChaincode, encode_args("init", ["1"]))
                .unwrap();
        let err = session
            .expect_value("TxAdd", encode_args("invoke", ["add", "10"]), 110)
            .unwrap_err();

        assert!(matches!(err, HarnessError::MalformedPayload { .. }));
        assert_eq!(err.dump().call, "invoke,add,10");
        assert_eq!(err.dump().payload, "abc");
        assert_eq!(session.stats().succeeded, 1);
    }

    #[test]
    fn test_submit_transaction() {
        let mut session = session();
        let response =
            session.submit_transaction("TxAdd", &Transaction::new("invoke", ["add", "5"]));
        assert_eq!(response.payload, b"105");
        assert_eq!(session.stats().submitted, 1);
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(session().id(), session().id());
    }
}
