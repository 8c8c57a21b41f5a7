//! # Verification
//!
//! Compares a response against what a step expects.

use crate::dump::DiagnosticDump;
use crate::errors::HarnessError;
use cc_shim::domain::response::Response;

/// Expected outcome of a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expectation {
    /// Status OK and payload decoding to this value.
    Value(i64),
    /// Any non-OK status.
    Failure,
}

/// Decodes a success payload to an integer. Returns `None` unless the
/// payload is a decimal integer.
#[must_use]
pub fn decode_payload(payload: &[u8]) -> Option<i64> {
    std::str::from_utf8(payload)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
}

/// Checks `response` against `expectation`.
///
/// A `FATAL` response fails verification whatever the expectation.
///
/// # Errors
///
/// Returns the matching `HarnessError` variant, carrying the diagnostic
/// dump of `args` and `response`.
pub fn verify(
    label: &str,
    args: &[Vec<u8>],
    response: &Response,
    expectation: Expectation,
) -> Result<(), HarnessError> {
    let dump = || Box::new(DiagnosticDump::new(args, response));

    if response.is_fatal() {
        return Err(HarnessError::Fatal {
            label: label.to_string(),
            dump: dump(),
        });
    }

    match expectation {
        Expectation::Failure if response.is_ok() => Err(HarnessError::UnexpectedSuccess {
            label: label.to_string(),
            dump: dump(),
        }),
        Expectation::Failure => Ok(()),
        Expectation::Value(_) if !response.is_ok() => Err(HarnessError::UnexpectedStatus {
            label: label.to_string(),
            dump: dump(),
        }),
        Expectation::Value(expected) => {
            let Some(actual) = decode_payload(&response.payload) else {
                return Err(HarnessError::MalformedPayload {
                    label: label.to_string(),
                    dump: dump(),
                });
            };
            if actual == expected {
                Ok(())
            } else {
                Err(HarnessError::ValueMismatch {
                    label: label.to_string(),
                    expected,
                    actual,
                    dump: dump(),
                })
            }
        }
    }
}
