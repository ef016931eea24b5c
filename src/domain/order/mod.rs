//! Order domain — locally tracked order records and call requests.

pub mod state;

use crate::shared::{ClientId, MarketId, OrderSide, SubaccountId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use state::OrderList;

/// Recorded when a successful create returns no order hash.
pub const UNKNOWN_ORDER_HASH: &str = "0xunknown";

// ─── OrderRecord ─────────────────────────────────────────────────────────────

/// An order this panel created, kept for display and later cancellation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    pub order_hash: String,
    pub client_id: ClientId,
    pub market_id: MarketId,
    pub created_at: DateTime<Utc>,
}

impl OrderRecord {
    pub fn new(order_hash: Option<String>, client_id: ClientId, market_id: MarketId) -> Self {
        let order_hash = order_hash
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| UNKNOWN_ORDER_HASH.to_string());
        Self {
            order_hash,
            client_id,
            market_id,
            created_at: Utc::now(),
        }
    }

    pub fn has_known_hash(&self) -> bool {
        self.order_hash != UNKNOWN_ORDER_HASH
    }
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// Deposit into a subaccount. `amount` is the raw human-readable input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub subaccount_id: SubaccountId,
    pub denom: String,
    pub amount: String,
}

/// Spot limit order on the panel's market. Price and quantity are raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub price: String,
    pub quantity: String,
    pub side: OrderSide,
    pub subaccount_id: SubaccountId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub subaccount_id: SubaccountId,
    pub order_hash: String,
    pub client_id: ClientId,
}
