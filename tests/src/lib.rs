//! # Calc-Chain Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs          # Session builders shared by the suites
//!     ├── calculator_flows.rs  # Init/add/subtract/reject scenarios
//!     └── properties.rs        # proptest: ordering and non-mutation
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cc-tests
//! cargo test -p cc-tests integration::properties::
//! ```

pub mod integration;
