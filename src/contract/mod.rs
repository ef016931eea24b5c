//! Contract boundary: the ExchangeDemo ABI, call envelopes and the
//! `ContractCaller` capability.
//!
//! Everything above this module talks to the contract only through
//! [`ContractCaller::read`] and [`ContractCaller::write`], which lets tests and
//! embedding applications substitute their own wallet/provider layer.

pub mod abi;

pub use abi::IExchangeDemo;

use crate::error::CallError;
use crate::shared::{ClientId, MarketId, OrderSide, SubaccountId};

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;
use std::future::Future;

// ─── ContractCall ────────────────────────────────────────────────────────────

/// A fully encoded call to one contract function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub address: Address,
    /// Solidity signature, e.g. `deposit(string,string,uint256)`.
    pub function: &'static str,
    /// ABI-encoded selector + arguments.
    pub calldata: Bytes,
}

impl ContractCall {
    pub fn new<T: SolCall>(address: Address, call: &T) -> Self {
        Self {
            address,
            function: T::SIGNATURE,
            calldata: Bytes::from(call.abi_encode()),
        }
    }

    /// Whether this call targets function `T`.
    pub fn is<T: SolCall>(&self) -> bool {
        self.calldata.len() >= 4 && self.calldata[..4] == T::SELECTOR
    }

    /// Decode the arguments back into the typed call.
    pub fn decode<T: SolCall>(&self) -> Result<T, CallError> {
        Ok(T::abi_decode(&self.calldata)?)
    }
}

/// Outcome of a successful state-changing call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReceipt {
    /// Transaction hash, when the caller submitted a transaction.
    pub tx_hash: Option<B256>,
    /// ABI-encoded return value, when the caller could observe it.
    pub return_data: Option<Bytes>,
}

/// Decode a function's return data.
pub fn decode_returns<T: SolCall>(data: &[u8]) -> Result<T::Return, CallError> {
    Ok(T::abi_decode_returns(data)?)
}

// ─── ContractCaller ──────────────────────────────────────────────────────────

/// Generic read/write access to a deployed contract.
///
/// Both operations are asynchronous and fallible. Implementations own
/// connectivity, signing, timeouts and retries; the panel never retries.
pub trait ContractCaller: Send + Sync {
    /// Execute a read-only call and return the raw return data.
    fn read(&self, call: ContractCall) -> impl Future<Output = Result<Bytes, CallError>> + Send;

    /// Submit a state-changing call.
    fn write(
        &self,
        call: ContractCall,
    ) -> impl Future<Output = Result<WriteReceipt, CallError>> + Send;
}

// ─── Call builders ───────────────────────────────────────────────────────────

pub fn subaccount_balances(address: Address, subaccount_id: &SubaccountId) -> ContractCall {
    ContractCall::new(
        address,
        &IExchangeDemo::subaccountBalancesCall {
            subaccountId: subaccount_id.as_str().to_string(),
        },
    )
}

pub fn deposit(
    address: Address,
    subaccount_id: &SubaccountId,
    denom: &str,
    amount: U256,
) -> ContractCall {
    ContractCall::new(
        address,
        &IExchangeDemo::depositCall {
            subaccountId: subaccount_id.as_str().to_string(),
            denom: denom.to_string(),
            amount,
        },
    )
}

pub fn create_spot_limit_order(
    address: Address,
    market_id: &MarketId,
    price: U256,
    quantity: U256,
    side: OrderSide,
    subaccount_id: &SubaccountId,
) -> ContractCall {
    ContractCall::new(
        address,
        &IExchangeDemo::createSpotLimitOrderCall {
            order: IExchangeDemo::SpotOrder {
                marketId: market_id.as_str().to_string(),
                price,
                quantity,
                orderType: side.as_u8(),
                subaccountId: subaccount_id.as_str().to_string(),
            },
        },
    )
}

pub fn cancel_spot_order(
    address: Address,
    subaccount_id: &SubaccountId,
    order_hash: &str,
    market_id: &MarketId,
    client_id: &ClientId,
) -> ContractCall {
    ContractCall::new(
        address,
        &IExchangeDemo::cancelSpotOrderCall {
            subaccountId: subaccount_id.as_str().to_string(),
            orderHash: order_hash.to_string(),
            marketId: market_id.as_str().to_string(),
            clientId: client_id.as_str().to_string(),
        },
    )
}
