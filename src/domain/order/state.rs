//! Order list — the panel-owned record of orders created in this session.

use super::{OrderRecord, UNKNOWN_ORDER_HASH};

/// Orders in creation order. Append-only unless the panel is configured to
/// drop cancelled orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderList {
    orders: Vec<OrderRecord>,
}

impl OrderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: OrderRecord) {
        self.orders.push(record);
    }

    pub fn get(&self, index: usize) -> Option<&OrderRecord> {
        self.orders.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderRecord> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn last(&self) -> Option<&OrderRecord> {
        self.orders.last()
    }

    /// Remove the record matching a cancelled order.
    ///
    /// Matches on client id first; falls back to the order hash unless it is
    /// the unknown sentinel. Returns the number of records removed.
    pub fn remove_cancelled(&mut self, order_hash: &str, client_id: &str) -> usize {
        let before = self.orders.len();
        if !client_id.is_empty() && self.orders.iter().any(|o| o.client_id.as_str() == client_id) {
            self.orders.retain(|o| o.client_id.as_str() != client_id);
        } else if !order_hash.is_empty() && order_hash != UNKNOWN_ORDER_HASH {
            self.orders.retain(|o| o.order_hash != order_hash);
        }
        before - self.orders.len()
    }
}
