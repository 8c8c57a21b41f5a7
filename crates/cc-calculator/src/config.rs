//! # Chaincode Configuration

use crate::domain::operations::OverflowPolicy;

/// Default ledger key for the stored value.
pub const DEFAULT_STATE_KEY: &str = "value";

/// Calculator chaincode configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaincodeConfig {
    /// Ledger key the value is stored under.
    pub state_key: String,
    /// Value used when `Init` carries no operand. `None` makes the operand
    /// mandatory.
    pub default_initial_value: Option<i64>,
    /// Behaviour when a result leaves the `i64` range.
    pub overflow_policy: OverflowPolicy,
    /// Attach `calc.*` events to committed transactions.
    pub emit_events: bool,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            state_key: DEFAULT_STATE_KEY.to_string(),
            default_initial_value: None,
            overflow_policy: OverflowPolicy::Fail,
            emit_events: true,
        }
    }
}

impl ChaincodeConfig {
    /// Sets the state key.
    #[must_use]
    pub fn with_state_key(mut self, key: impl Into<String>) -> Self {
        self.state_key = key.into();
        self
    }

    /// Sets the value `Init` falls back to when called without an operand.
    #[must_use]
    pub fn with_default_initial_value(mut self, value: i64) -> Self {
        self.default_initial_value = Some(value);
        self
    }

    /// Sets the overflow policy.
    #[must_use]
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Enables or disables event emission.
    #[must_use]
    pub fn with_events(mut self, enabled: bool) -> Self {
        self.emit_events = enabled;
        self
    }
}
