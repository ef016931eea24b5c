//! Panel configuration: deployment constants and behavior policies.
//!
//! Everything the panel treats as constant for its lifetime is injected here
//! rather than hardcoded, so one build can target several deployments or mock
//! addresses in tests.

use crate::error::PanelError;
use crate::network::{DEFAULT_MARKET_ID, DEFAULT_MARKET_LABEL};
use crate::shared::MarketId;

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

// ─── Policies ────────────────────────────────────────────────────────────────

/// What a failed balance query does to the balance view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadFailurePolicy {
    /// Show the empty placeholder; no error is recorded.
    #[default]
    EmptyList,
    /// Keep whatever the previous successful query returned.
    LastKnownValue,
    /// Show the placeholder and record an error notice.
    ErrorBanner,
}

/// What a successful cancel does to the order list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelledOrderPolicy {
    #[default]
    Keep,
    Remove,
}

/// Whether a successful deposit is confirmed to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositFeedback {
    #[default]
    Silent,
    Notify,
}

// ─── PanelConfig ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub contract_address: Address,
    pub market_id: MarketId,
    /// Human label for the market, used in the rendered title.
    pub market_label: String,
    pub read_failure: ReadFailurePolicy,
    pub cancelled_orders: CancelledOrderPolicy,
    pub deposit_feedback: DepositFeedback,
    /// Clear the error notice when a later write succeeds.
    pub clear_error_on_success: bool,
    /// Number of notices kept; 1 is a single overwritable slot.
    pub notice_capacity: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            contract_address: address!("2fec4a9029dfb413465a55af45242b2548257bda"),
            market_id: MarketId::from(DEFAULT_MARKET_ID),
            market_label: DEFAULT_MARKET_LABEL.to_string(),
            read_failure: ReadFailurePolicy::default(),
            cancelled_orders: CancelledOrderPolicy::default(),
            deposit_feedback: DepositFeedback::default(),
            clear_error_on_success: false,
            notice_capacity: 1,
        }
    }
}

impl PanelConfig {
    /// Load from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PanelError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PanelError> {
        if self.market_id.as_str().trim().is_empty() {
            return Err(PanelError::Config("market_id must not be empty".to_string()));
        }
        if self.contract_address == Address::ZERO {
            return Err(PanelError::Config(
                "contract_address must not be the zero address".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a `0x`-prefixed contract address.
pub fn parse_address(s: &str) -> Result<Address, PanelError> {
    s.trim()
        .parse::<Address>()
        .map_err(|e| PanelError::Config(format!("invalid contract address '{}': {}", s, e)))
}
