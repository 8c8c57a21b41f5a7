//! # Driving Port (API - Inbound)
//!
//! The interface a chaincode exposes to its host.

use crate::ports::outbound::ChaincodeStub;

/// A deployable state machine whose state lives in the ledger.
///
/// Both entry points return the success payload or a typed error; the host
/// encodes that into a wire `Response`. Implementations keep no hidden
/// globals: all state goes through `stub`.
pub trait Chaincode {
    /// Error returned by failed calls.
    type Error: std::error::Error;

    /// Called once when the chaincode is instantiated (or upgraded).
    ///
    /// The first argument is always the function name, so a bare
    /// `["5"]` carries no parameters.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the arguments are malformed or initial state
    /// cannot be written.
    fn init(&self, stub: &mut dyn ChaincodeStub) -> Result<Vec<u8>, Self::Error>;

    /// Called for every transaction.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the transaction is rejected. A rejected
    /// transaction must leave ledger state untouched.
    fn invoke(&self, stub: &mut dyn ChaincodeStub) -> Result<Vec<u8>, Self::Error>;

    /// Returns true if `error` leaves the chaincode unable to serve further
    /// calls. The host reports such errors with the `FATAL` status.
    fn is_fatal(&self, error: &Self::Error) -> bool {
        let _ = error;
        false
    }
}
