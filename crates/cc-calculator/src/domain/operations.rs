//! # Operations
//!
//! Closed set of commands the calculator understands, and their arithmetic.
//!
//! Two calling conventions are accepted:
//!
//! | Arguments | Meaning |
//! |-----------|---------|
//! | `invoke, <op>, <operand>` | generic entry, keyword in argument 1 |
//! | `<op>, <operand>` | keyword as the function name |
//! | `query` / `invoke, query` | read the current value |

use crate::domain::value_objects::{LedgerValue, Operand};
use crate::errors::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic entry function name.
pub const INVOKE_FUNCTION: &str = "invoke";

/// Read-only function name.
pub const QUERY_FUNCTION: &str = "query";

// =============================================================================
// OVERFLOW POLICY
// =============================================================================

/// What happens when a result leaves the `i64` range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Reject the transaction with `CalcError::Overflow`.
    #[default]
    Fail,
    /// Clamp to `i64::MIN` / `i64::MAX`.
    Saturate,
}

// =============================================================================
// OPERATION
// =============================================================================

/// State-mutating arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `value + operand`
    Add,
    /// `value - operand`
    Subtract,
}

impl Operation {
    /// Every supported operation.
    pub const ALL: [Operation; 2] = [Operation::Add, Operation::Subtract];

    /// Looks up an operation by its keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.keyword() == keyword)
    }

    /// Wire keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
        }
    }

    /// Applies the operation.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Overflow` under `OverflowPolicy::Fail` if the
    /// result does not fit in an `i64`.
    pub fn apply(
        self,
        current: LedgerValue,
        operand: Operand,
        policy: OverflowPolicy,
    ) -> Result<LedgerValue, CalcError> {
        let (a, b) = (current.get(), operand.get());
        let result = match (self, policy) {
            (Self::Add, OverflowPolicy::Fail) => a.checked_add(b),
            (Self::Subtract, OverflowPolicy::Fail) => a.checked_sub(b),
            (Self::Add, OverflowPolicy::Saturate) => Some(a.saturating_add(b)),
            (Self::Subtract, OverflowPolicy::Saturate) => Some(a.saturating_sub(b)),
        };
        result.map(LedgerValue).ok_or(CalcError::Overflow {
            operation: self,
            current: a,
            operand: b,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// =============================================================================
// COMMAND
// =============================================================================

/// A parsed `Invoke` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Mutate the stored value.
    Apply {
        /// Operation to apply.
        operation: Operation,
        /// Its operand.
        operand: Operand,
    },
    /// Return the stored value unchanged.
    Query,
}

impl Command {
    /// Parses the function name and parameters of an `Invoke` call.
    ///
    /// Arity is checked after the keyword, so an unknown keyword is always
    /// reported as `UnknownOperation`.
    ///
    /// # Errors
    ///
    /// - `CalcError::UnknownOperation` for an unrecognised keyword
    /// - `CalcError::InvalidArgument` for an empty argument list, wrong arity
    ///   or a non-numeric operand
    pub fn parse(function: &str, params: &[String]) -> Result<Self, CalcError> {
        if function.is_empty() {
            return Err(CalcError::InvalidArgument(
                "invoke called without arguments".to_string(),
            ));
        }
        if function != INVOKE_FUNCTION {
            return Self::parse_keyword(function, params);
        }
        match params.split_first() {
            Some((keyword, operands)) => Self::parse_keyword(keyword, operands),
            None => Err(CalcError::InvalidArgument(format!(
                "{INVOKE_FUNCTION} expects an operation keyword"
            ))),
        }
    }

    fn parse_keyword(keyword: &str, operands: &[String]) -> Result<Self, CalcError> {
        if keyword == QUERY_FUNCTION {
            return if operands.is_empty() {
                Ok(Self::Query)
            } else {
                Err(CalcError::InvalidArgument(format!(
                    "{QUERY_FUNCTION} takes no operands, got {}",
                    operands.len()
                )))
            };
        }

        let operation = Operation::from_keyword(keyword)
            .ok_or_else(|| CalcError::UnknownOperation(keyword.to_string()))?;

        match operands {
            [operand] => Ok(Self::Apply {
                operation,
                operand: Operand::parse(operand)?,
            }),
            _ => Err(CalcError::InvalidArgument(format!(
                "{operation} expects exactly 1 operand, got {}",
                operands.len()
            ))),
        }
    }

    /// Returns true if the command never writes state.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Query)
    }
}
