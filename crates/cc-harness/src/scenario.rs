//! # Scenario Steps
//!
//! Ordered steps for `HarnessSession::run`. Later steps depend on the state
//! left by earlier ones, so a run stops at the first failure.

use crate::verify::Expectation;
use cc_shim::domain::args::Transaction;

/// One labelled call and its expected outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Label, used as the transaction id.
    pub label: String,
    /// Call to submit.
    pub transaction: Transaction,
    /// Expected outcome.
    pub expectation: Expectation,
}

impl Step {
    /// Step expected to succeed with `expected` as payload.
    pub fn expect_value(label: impl Into<String>, transaction: Transaction, expected: i64) -> Self {
        Self {
            label: label.into(),
            transaction,
            expectation: Expectation::Value(expected),
        }
    }

    /// Step expected to be rejected.
    pub fn expect_failure(label: impl Into<String>, transaction: Transaction) -> Self {
        Self {
            label: label.into(),
            transaction,
            expectation: Expectation::Failure,
        }
    }
}

/// Outcome of a run in which every step passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Steps executed.
    pub steps_passed: usize,
    /// Value returned by the last successful step, if any.
    pub last_value: Option<i64>,
}
