//! In-memory `ContractCaller` for panel tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use alloy_primitives::{Bytes, B256, U256};
use alloy_sol_types::SolValue;
use exchange_panel::prelude::*;

/// Records every call and replays queued responses.
///
/// With nothing queued, reads return an empty balance list and writes succeed
/// with an empty receipt.
#[derive(Default)]
pub struct MockCaller {
    calls: Mutex<Vec<ContractCall>>,
    reads: Mutex<VecDeque<Result<Bytes, CallError>>>,
    writes: Mutex<VecDeque<Result<WriteReceipt, CallError>>>,
}

impl MockCaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_read(&self, response: Result<Bytes, CallError>) {
        self.reads.lock().unwrap().push_back(response);
    }

    pub fn push_write(&self, response: Result<WriteReceipt, CallError>) {
        self.writes.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<ContractCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> ContractCall {
        self.calls.lock().unwrap().last().cloned().expect("no call recorded")
    }
}

impl ContractCaller for MockCaller {
    async fn read(&self, call: ContractCall) -> Result<Bytes, CallError> {
        self.calls.lock().unwrap().push(call);
        tokio::task::yield_now().await;
        let queued = self.reads.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| Ok(balances_return(&[])))
    }

    async fn write(&self, call: ContractCall) -> Result<WriteReceipt, CallError> {
        self.calls.lock().unwrap().push(call);
        tokio::task::yield_now().await;
        let queued = self.writes.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| Ok(WriteReceipt::default()))
    }
}

/// ABI-encoded `subaccountBalances` return value.
pub fn balances_return(entries: &[(&str, U256)]) -> Bytes {
    let balances: Vec<IExchangeDemo::SubaccountBalance> = entries
        .iter()
        .map(|(denom, amount)| IExchangeDemo::SubaccountBalance {
            denom: denom.to_string(),
            amount: *amount,
        })
        .collect();
    Bytes::from(balances.abi_encode())
}

/// Successful create receipt carrying the returned order hash.
pub fn order_created(hash: &str) -> WriteReceipt {
    WriteReceipt {
        tx_hash: Some(B256::repeat_byte(0xaa)),
        return_data: Some(Bytes::from(hash.to_string().abi_encode())),
    }
}

pub fn e18(whole: u64) -> U256 {
    U256::from(whole) * U256::from(10u64).pow(U256::from(18))
}

pub fn panel(caller: MockCaller) -> ContractPanel<MockCaller> {
    ContractPanel::builder().build(caller).unwrap()
}
