//! Form domain — the panel's raw input fields.
//!
//! Fields hold exactly what the user typed. Numeric fields are converted at
//! submission time; nothing here validates across fields.

use crate::domain::order::{CancelOrderRequest, CreateOrderRequest, DepositRequest, OrderRecord};
use crate::shared::{ClientId, OrderSide, SubaccountId};
use serde::{Deserialize, Serialize};

/// Default denom offered by the deposit form.
pub const DEFAULT_DENOM: &str = "inj";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub subaccount_id: String,
    pub price: String,
    pub quantity: String,
    /// `"1"` = BUY, `"2"` = SELL.
    pub order_side: String,
    pub denom: String,
    pub amount: String,
    pub client_id: String,
    pub order_hash: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            subaccount_id: String::new(),
            price: String::new(),
            quantity: String::new(),
            order_side: OrderSide::Buy.as_u8().to_string(),
            denom: DEFAULT_DENOM.to_string(),
            amount: String::new(),
            client_id: String::new(),
            order_hash: String::new(),
        }
    }
}

impl FormState {
    pub fn subaccount(&self) -> SubaccountId {
        SubaccountId::new(self.subaccount_id.clone())
    }

    pub fn deposit_request(&self) -> DepositRequest {
        DepositRequest {
            subaccount_id: self.subaccount(),
            denom: self.denom.clone(),
            amount: self.amount.clone(),
        }
    }

    /// Fails only when the side field is not one of the two encoded values.
    pub fn create_order_request(&self) -> Result<CreateOrderRequest, String> {
        Ok(CreateOrderRequest {
            price: self.price.clone(),
            quantity: self.quantity.clone(),
            side: self.order_side.parse()?,
            subaccount_id: self.subaccount(),
        })
    }

    pub fn cancel_order_request(&self) -> CancelOrderRequest {
        CancelOrderRequest {
            subaccount_id: self.subaccount(),
            order_hash: self.order_hash.clone(),
            client_id: ClientId::new(self.client_id.clone()),
        }
    }

    /// Copy an order's identifiers into the cancel fields.
    pub fn select_for_cancel(&mut self, order: &OrderRecord) {
        self.order_hash = order.order_hash.clone();
        self.client_id = order.client_id.as_str().to_string();
    }
}
