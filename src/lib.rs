//! # exchange-panel
//!
//! A thin client for the ExchangeDemo spot market contract: deposit into a
//! subaccount, create and cancel spot limit orders, read subaccount balances.
//! Matching, balance accounting and authorization all live in the contract;
//! this crate marshals form input into contract calls and keeps the view state.
//!
//! ## Architecture
//!
//! 1. **Core** — newtypes, 18-decimal fixed-point scaling, the contract ABI,
//!    domain records (always available)
//! 2. **Transport** — `JsonRpcCaller`, a `ContractCaller` over Ethereum JSON-RPC
//! 3. **Panel** — `ContractPanel` with view state, policies and rendering
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use exchange_panel::prelude::*;
//!
//! let caller = JsonRpcCaller::new("http://127.0.0.1:8545")?.with_from(account);
//! let panel = ContractPanel::builder()
//!     .market_id(DEFAULT_MARKET_ID)
//!     .build(caller)?;
//!
//! panel.update_form(|f| {
//!     f.subaccount_id = "0xYourAddress-0".into();
//!     f.amount = "5".into();
//! }).await;
//! panel.submit_deposit().await?;
//! println!("{}", panel.render().await);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and fixed-point conversion.
pub mod shared;

/// Contract ABI, call envelopes and the `ContractCaller` capability.
pub mod contract;

/// Domain modules: balances, orders, form fields.
pub mod domain;

/// Error types.
pub mod error;

/// Deployment constants.
pub mod network;

/// Panel configuration and policies.
pub mod config;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

/// JSON-RPC `ContractCaller`.
#[cfg(feature = "http")]
pub mod rpc;

// ── Layer 3: Panel ───────────────────────────────────────────────────────────

/// `ContractPanel` — the primary entry point.
pub mod panel;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + scaling
    pub use crate::shared::{
        format_units, parse_units, to_fixed_or_zero, ClientId, MarketId, OrderSide,
        ScalingError, SubaccountId, FIXED_POINT_DECIMALS,
    };

    // Contract boundary
    pub use crate::contract::{ContractCall, ContractCaller, IExchangeDemo, WriteReceipt};

    // Domain types
    pub use crate::domain::balance::{BalanceEntry, BalanceView, NO_BALANCE_PLACEHOLDER};
    pub use crate::domain::form::FormState;
    pub use crate::domain::order::{
        CancelOrderRequest, CreateOrderRequest, DepositRequest, OrderList, OrderRecord,
        UNKNOWN_ORDER_HASH,
    };

    // Errors
    pub use crate::error::{CallError, PanelError};

    // Config + network
    pub use crate::config::{CancelledOrderPolicy, DepositFeedback, PanelConfig, ReadFailurePolicy};
    pub use crate::network::{DEFAULT_CONTRACT_ADDRESS, DEFAULT_MARKET_ID, DEFAULT_RPC_URL};

    // Panel
    pub use crate::panel::render::NO_ORDERS_PLACEHOLDER;
    pub use crate::panel::{
        ContractPanel, ContractPanelBuilder, Notice, NoticeLevel, Notices, PanelState,
        CANCEL_ORDER_FAILED, CREATE_ORDER_FAILED, DEPOSIT_FAILED, DEPOSIT_SUCCEEDED,
        QUERY_BALANCES_FAILED,
    };

    // Transport
    #[cfg(feature = "http")]
    pub use crate::rpc::JsonRpcCaller;
}
