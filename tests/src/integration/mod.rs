//! # Integration Suites
//!
//! Drive `cc-calculator` through `cc-harness` and `cc-shim` end to end.

pub mod fixtures;

#[cfg(test)]
mod calculator_flows;
#[cfg(test)]
mod properties;
