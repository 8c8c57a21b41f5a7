//! # Mock Stub
//!
//! In-process stand-in for the chaincode host. Binds one chaincode to one
//! ledger and runs calls synchronously, in submission order.

use crate::adapters::memory_ledger::InMemoryLedger;
use crate::domain::args::decode_args;
use crate::domain::response::Response;
use crate::errors::StoreError;
use crate::events::ChaincodeEvent;
use crate::ports::inbound::Chaincode;
use crate::ports::outbound::{ChaincodeStub, LedgerStore};
use tracing::{debug, error, instrument, warn};

/// Entry point of a mock call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CallKind {
    Init,
    Invoke,
}

/// The per-call transaction context handed to the chaincode.
struct TxContext<'a, L: LedgerStore> {
    tx_id: &'a str,
    args: &'a [Vec<u8>],
    ledger: &'a mut L,
    event: Option<ChaincodeEvent>,
}

impl<L: LedgerStore> ChaincodeStub for TxContext<'_, L> {
    fn tx_id(&self) -> &str {
        self.tx_id
    }

    fn args(&self) -> &[Vec<u8>] {
        self.args
    }

    fn get_state(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.ledger.get(key)
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.ledger.put(key, value)
    }

    fn set_event(&mut self, name: &str, payload: Vec<u8>) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidEvent("event name must not be empty".to_string()));
        }
        self.event = Some(ChaincodeEvent {
            tx_id: self.tx_id.to_string(),
            name: name.to_string(),
            payload,
        });
        Ok(())
    }
}

/// Mock host session: one chaincode, one ledger, sequential calls.
pub struct MockStub<C: Chaincode, L: LedgerStore = InMemoryLedger> {
    name: String,
    chaincode: C,
    ledger: L,
    last_event: Option<ChaincodeEvent>,
    tx_count: u64,
}

impl<C: Chaincode> MockStub<C> {
    /// Create a stub over a fresh in-memory ledger.
    pub fn new(name: impl Into<String>, chaincode: C) -> Self {
        Self::with_ledger(name, chaincode, InMemoryLedger::new())
    }
}

impl<C: Chaincode, L: LedgerStore> MockStub<C, L> {
    /// Create a stub over the given ledger.
    pub fn with_ledger(name: impl Into<String>, chaincode: C, ledger: L) -> Self {
        Self {
            name: name.into(),
            chaincode,
            ledger,
            last_event: None,
            tx_count: 0,
        }
    }

    /// Runs the chaincode's `Init` inside transaction `tx_id`.
    #[instrument(skip(self, args), fields(stub = %self.name))]
    pub fn mock_init(&mut self, tx_id: &str, args: Vec<Vec<u8>>) -> Response {
        self.execute(CallKind::Init, tx_id, &args)
    }

    /// Runs the chaincode's `Invoke` inside transaction `tx_id`.
    #[instrument(skip(self, args), fields(stub = %self.name))]
    pub fn mock_invoke(&mut self, tx_id: &str, args: Vec<Vec<u8>>) -> Response {
        self.execute(CallKind::Invoke, tx_id, &args)
    }

    fn execute(&mut self, kind: CallKind, tx_id: &str, args: &[Vec<u8>]) -> Response {
        debug!(?kind, args = ?decode_args(args), "Starting mock transaction");

        let mut ctx = TxContext {
            tx_id,
            args,
            ledger: &mut self.ledger,
            event: None,
        };
        let result = match kind {
            CallKind::Init => self.chaincode.init(&mut ctx),
            CallKind::Invoke => self.chaincode.invoke(&mut ctx),
        };
        let event = ctx.event.take();
        self.tx_count += 1;

        match &result {
            Ok(payload) => {
                debug!(payload_len = payload.len(), "Mock transaction committed");
                if event.is_some() {
                    self.last_event = event;
                }
            }
            Err(e) if self.chaincode.is_fatal(e) => {
                error!(error = %e, "Mock transaction failed fatally");
            }
            Err(e) => {
                warn!(error = %e, "Mock transaction rejected");
            }
        }

        let chaincode = &self.chaincode;
        Response::from_result(result, |e| chaincode.is_fatal(e))
    }

    /// Reads committed state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Absent` if nothing is stored under `key`.
    pub fn state(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.ledger.get(key)
    }

    /// Stub name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound chaincode.
    #[must_use]
    pub fn chaincode(&self) -> &C {
        &self.chaincode
    }

    /// The bound ledger.
    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Event of the most recent committed transaction that emitted one.
    #[must_use]
    pub fn last_event(&self) -> Option<&ChaincodeEvent> {
        self.last_event.as_ref()
    }

    /// Number of calls executed, committed or not.
    #[must_use]
    pub fn tx_count(&self) -> u64 {
        self.tx_count
    }
}

// =============================================================================
// TESTS
// =============================================================================
