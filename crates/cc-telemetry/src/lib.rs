//! # CC Telemetry
//!
//! Structured logging for Calc-Chain, built on `tracing` and
//! `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cc_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() -> Result<(), cc_telemetry::TelemetryError> {
//!     init_tracing(&TelemetryConfig::from_env())?;
//!     // Spans and events from every crate are now printed
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CC_SERVICE_NAME` | `calc-chain` | Service name in the startup record |
//! | `CC_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `CC_JSON_LOGS` | `false` | JSON formatted output |
//! | `CC_LOG_TARGET` | `true` | Include event targets |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{init_test_tracing, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber could not be installed.
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// The configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience macro for creating a span with chaincode context.
///
/// # Example
///
/// ```rust,ignore
/// use cc_telemetry::chaincode_span;
///
/// let _span = chaincode_span!("scenario", chaincode = "calc", step = 2).entered();
/// ```
#[macro_export]
macro_rules! chaincode_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
