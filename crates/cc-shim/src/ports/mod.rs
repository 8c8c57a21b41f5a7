//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the chaincode boundary.
//!
//! - **Driving Port (Inbound)**: `Chaincode`
//! - **Driven Ports (Outbound)**: `ChaincodeStub`, `LedgerStore`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
