//! JSON-RPC transport — `JsonRpcCaller`, a [`ContractCaller`] over HTTP.
//!
//! Reads go through `eth_call`. Writes are optionally simulated with
//! `eth_call` first (to surface revert reasons and capture return data such as
//! the created order hash) and then sent with `eth_sendTransaction`, signed by
//! the node or wallet that owns the `from` account.
//!
//! No retries: a failed request is reported once, as-is.

pub mod wire;

use crate::contract::{ContractCall, ContractCaller, WriteReceipt};
use crate::error::{CallError, PanelError};
use wire::{RpcRequest, RpcResponse, TransactionRequest};

use alloy_primitives::{Address, Bytes, B256};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Block tag used for every `eth_call`.
const BLOCK_TAG: &str = "latest";

pub struct JsonRpcCaller {
    url: String,
    client: Client,
    from: Option<Address>,
    simulate_writes: bool,
    next_id: Arc<AtomicU64>,
}

impl JsonRpcCaller {
    pub fn new(url: &str) -> Result<Self, PanelError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }
        let client = builder
            .build()
            .map_err(|e| PanelError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            client,
            from: None,
            simulate_writes: true,
            next_id: Arc::new(AtomicU64::new(1)),
        })
    }

    /// Account that signs writes. Without it the node picks its default account.
    pub fn with_from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Toggle the `eth_call` dry run before each write (on by default).
    pub fn simulate_writes(mut self, simulate: bool) -> Self {
        self.simulate_writes = simulate;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request<P: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> Result<T, CallError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest::new(id, method, params);

        tracing::debug!(id, method, url = %self.url, "JSON-RPC request");
        let resp = self.client.post(&self.url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(CallError::Transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )));
        }

        resp.json::<RpcResponse<T>>().await?.into_result()
    }

    fn transaction(&self, call: &ContractCall) -> TransactionRequest {
        TransactionRequest {
            from: self.from,
            to: call.address,
            data: call.calldata.clone(),
        }
    }
}

impl Clone for JsonRpcCaller {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            client: self.client.clone(),
            from: self.from,
            simulate_writes: self.simulate_writes,
            next_id: self.next_id.clone(),
        }
    }
}

impl ContractCaller for JsonRpcCaller {
    async fn read(&self, call: ContractCall) -> Result<Bytes, CallError> {
        let tx = self.transaction(&call);
        self.request("eth_call", (tx, BLOCK_TAG)).await
    }

    async fn write(&self, call: ContractCall) -> Result<WriteReceipt, CallError> {
        let tx = self.transaction(&call);

        let return_data = if self.simulate_writes {
            let data: Bytes = self.request("eth_call", (&tx, BLOCK_TAG)).await?;
            Some(data)
        } else {
            None
        };

        let tx_hash: B256 = self.request("eth_sendTransaction", [&tx]).await?;
        tracing::debug!(function = call.function, %tx_hash, "Transaction sent");

        Ok(WriteReceipt {
            tx_hash: Some(tx_hash),
            return_data,
        })
    }
}
