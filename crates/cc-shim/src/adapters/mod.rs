//! # Adapters Layer (Outer Hexagon)
//!
//! In-process implementations of the driven ports.

pub mod memory_ledger;
pub mod mock_stub;

pub use memory_ledger::*;
pub use mock_stub::*;
