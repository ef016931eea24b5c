//! Balance domain — subaccount balances and their rendered projection.

use crate::contract::IExchangeDemo;
use crate::shared::{format_units, FIXED_POINT_DECIMALS};

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Placeholder shown when there is nothing to list.
pub const NO_BALANCE_PLACEHOLDER: &str = "无余额或请输入有效的子账户 ID";

/// One denom held by a subaccount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub denom: String,
    /// 18-decimal fixed-point amount.
    pub amount: U256,
}

impl BalanceEntry {
    pub fn display_amount(&self) -> String {
        format_units(self.amount, FIXED_POINT_DECIMALS)
    }
}

impl From<IExchangeDemo::SubaccountBalance> for BalanceEntry {
    fn from(b: IExchangeDemo::SubaccountBalance) -> Self {
        Self {
            denom: b.denom,
            amount: b.amount,
        }
    }
}

/// Result of the most recent balance query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceView {
    pub entries: Vec<BalanceEntry>,
}

impl BalanceView {
    pub fn new(entries: Vec<BalanceEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `denom: amount` lines, or the placeholder when empty.
    pub fn lines(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![NO_BALANCE_PLACEHOLDER.to_string()];
        }
        self.entries
            .iter()
            .map(|e| format!("{}: {}", e.denom, e.display_amount()))
            .collect()
    }
}
