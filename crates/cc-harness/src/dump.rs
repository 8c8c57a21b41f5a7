//! # Diagnostic Dump
//!
//! Human-readable rendering of a call and its response, produced only when
//! a verification step fails.

use cc_shim::domain::args::decode_args;
use cc_shim::domain::response::Response;
use std::fmt;

/// Rendered call and response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticDump {
    /// Arguments joined with `,`.
    pub call: String,
    /// Response status.
    pub status: i32,
    /// Response message.
    pub message: String,
    /// Payload as text, or `0x`-prefixed hex when it is not UTF-8.
    pub payload: String,
}

impl DiagnosticDump {
    /// Renders `args` and `response`.
    #[must_use]
    pub fn new(args: &[Vec<u8>], response: &Response) -> Self {
        Self {
            call: decode_args(args).join(","),
            status: response.status,
            message: response.message.clone(),
            payload: render_payload(&response.payload),
        }
    }
}

/// Renders payload bytes for display.
#[must_use]
pub fn render_payload(payload: &[u8]) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) => text.to_string(),
        Err(_) => format!("0x{}", hex::encode(payload)),
    }
}

impl fmt::Display for DiagnosticDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Call:     {}", self.call)?;
        writeln!(f, "RetCode:  {}", self.status)?;
        writeln!(f, "RetMsg:   {}", self.message)?;
        write!(f, "Payload:  {}", self.payload)
    }
}
