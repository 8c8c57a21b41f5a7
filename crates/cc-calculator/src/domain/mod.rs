//! # Domain Layer (Inner Hexagon)
//!
//! Pure calculator logic: value parsing, command parsing, arithmetic.
//! NO I/O, NO ledger access.

pub mod operations;
pub mod value_objects;

pub use operations::*;
pub use value_objects::*;
