//! JSON-RPC 2.0 envelopes and the Ethereum transaction object.

use crate::error::CallError;

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::{Revert, SolError};
use serde::{Deserialize, Serialize};

/// Prefix geth-style nodes put in front of revert reasons.
const EXECUTION_REVERTED: &str = "execution reverted";

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: P,
}

impl<'a, P> RpcRequest<'a, P> {
    pub fn new(id: u64, method: &'a str, params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

impl<T> RpcResponse<T> {
    pub fn into_result(self) -> Result<T, CallError> {
        if let Some(error) = self.error {
            return Err(error.into());
        }
        self.result.ok_or_else(|| {
            CallError::Decode("JSON-RPC response has neither result nor error".to_string())
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl RpcErrorObject {
    /// Revert reason from ABI-encoded `Error(string)` data, if present.
    fn revert_reason(&self) -> Option<String> {
        let data = self.data.as_ref()?.as_str()?;
        let bytes = hex::decode(data.trim_start_matches("0x")).ok()?;
        Revert::abi_decode(&bytes).ok().map(|r| r.reason)
    }
}

impl From<RpcErrorObject> for CallError {
    fn from(e: RpcErrorObject) -> Self {
        if let Some(reason) = e.revert_reason() {
            return CallError::Reverted(reason);
        }
        if let Some(reason) = e.message.strip_prefix(EXECUTION_REVERTED) {
            let reason = reason.trim_start_matches(':').trim();
            if !reason.is_empty() {
                return CallError::Reverted(reason.to_string());
            }
        }
        CallError::Rpc {
            code: e.code,
            message: e.message,
        }
    }
}

/// Transaction object accepted by `eth_call` and `eth_sendTransaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    pub to: Address,
    pub data: Bytes,
}
