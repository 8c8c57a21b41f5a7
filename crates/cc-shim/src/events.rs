//! # Chaincode Events
//!
//! Events a chaincode attaches to a transaction. Only events of committed
//! (successful) transactions are kept by the host.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// An event emitted by a committed transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeEvent {
    /// Transaction that emitted the event.
    pub tx_id: String,
    /// Event name.
    pub name: String,
    /// Opaque payload.
    pub payload: Vec<u8>,
}

impl ChaincodeEvent {
    /// Decodes a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the payload is not valid JSON for `T`.
    pub fn payload_json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }
}
