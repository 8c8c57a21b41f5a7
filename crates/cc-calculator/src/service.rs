//! # Calculator Chaincode
//!
//! The state machine behind the `Chaincode` port.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --Init--> Ready --Invoke(add|subtract|query)--> Ready
//! ```
//!
//! The lifecycle is derived from the ledger: `Ready` means a value is stored
//! under the configured key. Nothing is cached in the chaincode itself.
//!
//! ## Mutation Discipline
//!
//! Every fallible step (parsing, reading, arithmetic, event encoding) runs
//! before the single `put_state` of a transaction, so a rejected call never
//! leaves a partial write behind.

use crate::config::ChaincodeConfig;
use crate::domain::operations::Command;
use crate::domain::value_objects::LedgerValue;
use crate::errors::CalcError;
use crate::events::{topics, InitializedPayload, ValueChangedPayload};
use cc_shim::errors::StoreError;
use cc_shim::ports::{Chaincode, ChaincodeStub};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Lifecycle state of the chaincode on a given ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// No value stored yet. Only `Init` is meaningful.
    Uninitialized,
    /// Value stored. `Invoke` is accepted.
    Ready,
}

/// Single-value calculator chaincode.
#[derive(Debug, Clone, Default)]
pub struct CalcChaincode {
    config: ChaincodeConfig,
}

impl CalcChaincode {
    /// Create a chaincode with the given configuration.
    #[must_use]
    pub fn new(config: ChaincodeConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ChaincodeConfig {
        &self.config
    }

    /// Lifecycle state on the ledger behind `stub`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Store` if the ledger read fails for a reason other
    /// than the key being absent.
    pub fn lifecycle(&self, stub: &dyn ChaincodeStub) -> Result<Lifecycle, CalcError> {
        match stub.get_state(&self.config.state_key) {
            Ok(_) => Ok(Lifecycle::Ready),
            Err(e) if e.is_absent() => Ok(Lifecycle::Uninitialized),
            Err(e) => Err(e.into()),
        }
    }

    fn read_value(&self, stub: &dyn ChaincodeStub) -> Result<LedgerValue, CalcError> {
        let key = &self.config.state_key;
        match stub.get_state(key) {
            Ok(bytes) => LedgerValue::from_bytes(key, &bytes),
            Err(e) if e.is_absent() => Err(CalcError::NotInitialized { key: key.clone() }),
            Err(e) => Err(e.into()),
        }
    }

    fn initial_value(
        &self,
        function: &str,
        params: &[String],
    ) -> Result<LedgerValue, CalcError> {
        if function.parse::<i64>().is_ok() {
            return Err(CalcError::InvalidArgument(format!(
                "init value '{function}' passed as function name, expected [init, {function}]"
            )));
        }
        match params {
            [] => self
                .config
                .default_initial_value
                .map(LedgerValue::new)
                .ok_or_else(|| {
                    CalcError::InvalidArgument("init requires an initial value".to_string())
                }),
            [value] => LedgerValue::parse(value),
            _ => Err(CalcError::InvalidArgument(format!(
                "init expects at most 1 argument, got {}",
                params.len()
            ))),
        }
    }

    fn emit<T: Serialize>(
        &self,
        stub: &mut dyn ChaincodeStub,
        name: &str,
        payload: &T,
    ) -> Result<(), CalcError> {
        if !self.config.emit_events {
            return Ok(());
        }
        let bytes = serde_json::to_vec(payload)
            .map_err(|e| StoreError::InvalidEvent(e.to_string()))?;
        stub.set_event(name, bytes)?;
        Ok(())
    }
}

impl Chaincode for CalcChaincode {
    type Error = CalcError;

    #[instrument(
        skip(self, stub),
        fields(chaincode = crate::CHAINCODE_NAME, tx_id = %stub.tx_id())
    )]
    fn init(&self, stub: &mut dyn ChaincodeStub) -> Result<Vec<u8>, CalcError> {
        let (function, params) = stub.function_and_parameters();
        let value = self.initial_value(&function, &params)?;

        if matches!(self.lifecycle(stub), Ok(Lifecycle::Ready)) {
            warn!(
                key = %self.config.state_key,
                "Re-initializing chaincode, stored value is overwritten"
            );
        }

        self.emit(stub, topics::INITIALIZED, &InitializedPayload { value })?;
        stub.put_state(&self.config.state_key, value.to_bytes())
            .map_err(CalcError::Initialization)?;

        info!(value = value.get(), key = %self.config.state_key, "Chaincode initialized");
        Ok(value.to_bytes())
    }

    #[instrument(
        skip(self, stub),
        fields(chaincode = crate::CHAINCODE_NAME, tx_id = %stub.tx_id())
    )]
    fn invoke(&self, stub: &mut dyn ChaincodeStub) -> Result<Vec<u8>, CalcError> {
        let (function, params) = stub.function_and_parameters();
        let command = Command::parse(&function, &params)?;
        let current = self.read_value(stub)?;

        match command {
            Command::Query => {
                debug!(value = current.get(), "Query");
                Ok(current.to_bytes())
            }
            Command::Apply { operation, operand } => {
                let next = operation.apply(current, operand, self.config.overflow_policy)?;

                self.emit(
                    stub,
                    topics::VALUE_CHANGED,
                    &ValueChangedPayload {
                        operation,
                        operand,
                        previous: current,
                        current: next,
                    },
                )?;
                stub.put_state(&self.config.state_key, next.to_bytes())?;

                info!(
                    %operation,
                    operand = operand.get(),
                    previous = current.get(),
                    current = next.get(),
                    "Value updated"
                );
                Ok(next.to_bytes())
            }
        }
    }

    fn is_fatal(&self, error: &CalcError) -> bool {
        error.is_fatal()
    }
}

// =============================================================================
// TESTS
// =============================================================================
