//! # Argument Codec
//!
//! Converts between human-readable call arguments and the ordered
//! byte-argument list the invocation boundary carries.
//!
//! Element 0 is always the function name; elements 1..N are its operands.
//! Strings are encoded as UTF-8, which is lossless for every `&str`. No
//! validation happens here: malformed operands are rejected by the chaincode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Builds the byte-argument list for a call.
///
/// ```
/// use cc_shim::domain::args::encode_args;
///
/// let args = encode_args("invoke", ["add", "10"]);
/// assert_eq!(args, vec![b"invoke".to_vec(), b"add".to_vec(), b"10".to_vec()]);
/// ```
pub fn encode_args<I, S>(function: &str, operands: I) -> Vec<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    std::iter::once(function.as_bytes().to_vec())
        .chain(
            operands
                .into_iter()
                .map(|operand| operand.as_ref().as_bytes().to_vec()),
        )
        .collect()
}

/// Renders a byte-argument list back to strings.
///
/// Invalid UTF-8 is replaced rather than rejected; this is meant for
/// diagnostics, not for dispatch.
#[must_use]
pub fn decode_args(args: &[Vec<u8>]) -> Vec<String> {
    args.iter()
        .map(|arg| String::from_utf8_lossy(arg).into_owned())
        .collect()
}

/// Splits a byte-argument list into the function name and its parameters.
///
/// An empty list yields an empty function name.
#[must_use]
pub fn function_and_parameters(args: &[Vec<u8>]) -> (String, Vec<String>) {
    let mut strings = decode_args(args).into_iter();
    let function = strings.next().unwrap_or_default();
    (function, strings.collect())
}

/// A named call with ordered string arguments.
///
/// Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    function: String,
    args: Vec<String>,
}

impl Transaction {
    /// Creates a transaction.
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Function name (argument 0 on the wire).
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Operands (arguments 1..N on the wire).
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Encodes to the byte-argument list.
    #[must_use]
    pub fn encode(&self) -> Vec<Vec<u8>> {
        encode_args(&self.function, &self.args)
    }

    /// Decodes a byte-argument list. Returns `None` for an empty list.
    #[must_use]
    pub fn decode(args: &[Vec<u8>]) -> Option<Self> {
        if args.is_empty() {
            return None;
        }
        let (function, args) = function_and_parameters(args);
        Some(Self { function, args })
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.function)?;
        for arg in &self.args {
            write!(f, ",{arg}")?;
        }
        Ok(())
    }
}
