//! Plain-text rendering of the panel state.

use super::PanelState;
use crate::config::PanelConfig;
use std::fmt::Write;

/// Shown when no order has been created yet.
pub const NO_ORDERS_PLACEHOLDER: &str = "暂无订单";

pub fn title(config: &PanelConfig) -> String {
    format!("Injective 现货市场 ({})", config.market_label)
}

/// Render the whole panel: title, notices, balances, order list.
pub fn render(state: &PanelState, config: &PanelConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title(config));

    for notice in state.notices.iter() {
        let _ = writeln!(out, "{}", notice.message);
    }

    let _ = writeln!(out, "\n余额");
    for line in state.balances.lines() {
        let _ = writeln!(out, "  {}", line);
    }

    let _ = writeln!(out, "\n订单列表");
    if state.orders.is_empty() {
        let _ = writeln!(out, "  {}", NO_ORDERS_PLACEHOLDER);
    }
    for (i, order) in state.orders.iter().enumerate() {
        let _ = writeln!(out, "  [{}] 订单哈希: {}", i, order.order_hash);
        let _ = writeln!(out, "      市场 ID: {}", order.market_id);
        let _ = writeln!(out, "      CID: {}", order.client_id);
    }

    out
}
