//! # Domain Layer (Inner Hexagon)
//!
//! Wire-level value types of the invocation boundary.
//! NO I/O, NO state.

pub mod args;
pub mod response;

pub use args::*;
pub use response::*;
