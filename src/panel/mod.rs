//! Contract Interaction Panel — `ContractPanel`, the primary entry point.
//!
//! The panel owns the view state (form fields, balance view, order list,
//! notices), turns form input into contract calls through a
//! [`ContractCaller`], and folds the results back into that state.
//!
//! Operations take `&self`. State sits behind an async `RwLock` that is never
//! held across a contract call, so several operations may be in flight at
//! once; each completion only touches the fields it owns.

pub mod notice;
pub mod render;

use crate::config::{
    parse_address, CancelledOrderPolicy, DepositFeedback, PanelConfig, ReadFailurePolicy,
};
use crate::contract::{self, ContractCaller, IExchangeDemo, WriteReceipt};
use crate::domain::balance::BalanceView;
use crate::domain::form::FormState;
use crate::domain::order::{
    CancelOrderRequest, CreateOrderRequest, DepositRequest, OrderList, OrderRecord,
};
use crate::error::{CallError, PanelError};
use crate::shared::{
    format_units, to_fixed_or_zero, ClientId, MarketId, SubaccountId, FIXED_POINT_DECIMALS,
};

use async_lock::RwLock;
use std::sync::Arc;

pub use notice::{Notice, NoticeLevel, Notices};

/// Notice prefixes, one per operation.
pub const DEPOSIT_FAILED: &str = "存款失败";
pub const CREATE_ORDER_FAILED: &str = "创建订单失败";
pub const CANCEL_ORDER_FAILED: &str = "取消订单失败";
pub const QUERY_BALANCES_FAILED: &str = "查询余额失败";
pub const DEPOSIT_SUCCEEDED: &str = "存款成功";

// ─── PanelState ──────────────────────────────────────────────────────────────

/// Everything the panel renders. Lives exactly as long as the panel.
#[derive(Debug, Clone)]
pub struct PanelState {
    pub form: FormState,
    pub balances: BalanceView,
    pub orders: OrderList,
    pub notices: Notices,
}

impl PanelState {
    pub fn new(notice_capacity: usize) -> Self {
        Self {
            form: FormState::default(),
            balances: BalanceView::default(),
            orders: OrderList::new(),
            notices: Notices::new(notice_capacity),
        }
    }
}

// ─── ContractPanel ───────────────────────────────────────────────────────────

pub struct ContractPanel<C> {
    caller: Arc<C>,
    config: PanelConfig,
    state: Arc<RwLock<PanelState>>,
}

impl<C> Clone for ContractPanel<C> {
    fn clone(&self) -> Self {
        Self {
            caller: self.caller.clone(),
            config: self.config.clone(),
            state: self.state.clone(),
        }
    }
}

impl ContractPanel<()> {
    pub fn builder() -> ContractPanelBuilder {
        ContractPanelBuilder::default()
    }
}

impl<C: ContractCaller> ContractPanel<C> {
    pub fn new(caller: C, config: PanelConfig) -> Result<Self, PanelError> {
        config.validate()?;
        Ok(Self {
            caller: Arc::new(caller),
            state: Arc::new(RwLock::new(PanelState::new(config.notice_capacity))),
            config,
        })
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn market_id(&self) -> &MarketId {
        &self.config.market_id
    }

    pub fn caller(&self) -> &C {
        &self.caller
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Read a subaccount's balances into the balance view.
    ///
    /// A blank subaccount id is not sent; the view falls back to the
    /// placeholder. Failures are handled per [`ReadFailurePolicy`].
    pub async fn query_balances(
        &self,
        subaccount_id: &SubaccountId,
    ) -> Result<BalanceView, CallError> {
        if subaccount_id.is_empty() {
            tracing::debug!("Blank subaccount id, skipping balance query");
            self.state.write().await.balances = BalanceView::default();
            return Ok(BalanceView::default());
        }

        let call = contract::subaccount_balances(self.config.contract_address, subaccount_id);
        tracing::debug!(subaccount = %subaccount_id, function = call.function, "Reading balances");

        let result = match self.caller.read(call).await {
            Ok(data) => contract::decode_returns::<IExchangeDemo::subaccountBalancesCall>(&data),
            Err(e) => Err(e),
        };

        let mut state = self.state.write().await;
        match result {
            Ok(balances) => {
                let view = BalanceView::new(balances.into_iter().map(Into::into).collect());
                state.balances = view.clone();
                Ok(view)
            }
            Err(e) => {
                tracing::warn!(subaccount = %subaccount_id, error = %e, "Balance query failed");
                match self.config.read_failure {
                    ReadFailurePolicy::EmptyList => state.balances = BalanceView::default(),
                    ReadFailurePolicy::LastKnownValue => {}
                    ReadFailurePolicy::ErrorBanner => {
                        state.balances = BalanceView::default();
                        state
                            .notices
                            .error(format!("{}: {}", QUERY_BALANCES_FAILED, e));
                    }
                }
                Err(e)
            }
        }
    }

    /// Deposit into a subaccount. Unparsable amounts are sent as zero.
    pub async fn deposit(&self, request: &DepositRequest) -> Result<WriteReceipt, CallError> {
        let amount = to_fixed_or_zero(&request.amount, FIXED_POINT_DECIMALS);
        let call = contract::deposit(
            self.config.contract_address,
            &request.subaccount_id,
            &request.denom,
            amount,
        );
        tracing::debug!(
            subaccount = %request.subaccount_id,
            denom = %request.denom,
            %amount,
            "Submitting deposit"
        );

        match self.caller.write(call).await {
            Ok(receipt) => {
                tracing::info!(tx_hash = ?receipt.tx_hash, "Deposit submitted");
                let mut state = self.state.write().await;
                self.on_write_success(&mut state);
                if self.config.deposit_feedback == DepositFeedback::Notify {
                    state.notices.success(format!(
                        "{}: {} {}",
                        DEPOSIT_SUCCEEDED,
                        format_units(amount, FIXED_POINT_DECIMALS),
                        request.denom
                    ));
                }
                Ok(receipt)
            }
            Err(e) => {
                self.record_failure(DEPOSIT_FAILED, &e).await;
                Err(e)
            }
        }
    }

    /// Place a spot limit order on the configured market.
    ///
    /// A fresh client id is generated for every attempt. On success the order
    /// is appended to the list and its client id is written into the form.
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<OrderRecord, CallError> {
        let client_id = ClientId::generate();
        let price = to_fixed_or_zero(&request.price, FIXED_POINT_DECIMALS);
        let quantity = to_fixed_or_zero(&request.quantity, FIXED_POINT_DECIMALS);
        let call = contract::create_spot_limit_order(
            self.config.contract_address,
            &self.config.market_id,
            price,
            quantity,
            request.side,
            &request.subaccount_id,
        );
        tracing::debug!(
            cid = %client_id,
            market = %self.config.market_id,
            side = request.side.as_u8(),
            %price,
            %quantity,
            "Submitting spot limit order"
        );

        match self.caller.write(call).await {
            Ok(receipt) => {
                let order_hash = receipt.return_data.as_ref().and_then(|data| {
                    contract::decode_returns::<IExchangeDemo::createSpotLimitOrderCall>(data)
                        .map_err(|e| tracing::debug!(error = %e, "No order hash in return data"))
                        .ok()
                });
                let record =
                    OrderRecord::new(order_hash, client_id.clone(), self.config.market_id.clone());
                tracing::info!(
                    order_hash = %record.order_hash,
                    cid = %client_id,
                    tx_hash = ?receipt.tx_hash,
                    "Order created"
                );

                let mut state = self.state.write().await;
                self.on_write_success(&mut state);
                state.orders.push(record.clone());
                state.form.client_id = client_id.as_str().to_string();
                Ok(record)
            }
            Err(e) => {
                self.record_failure(CREATE_ORDER_FAILED, &e).await;
                Err(e)
            }
        }
    }

    /// Cancel a spot order by hash and client id.
    pub async fn cancel_order(
        &self,
        request: &CancelOrderRequest,
    ) -> Result<WriteReceipt, CallError> {
        let call = contract::cancel_spot_order(
            self.config.contract_address,
            &request.subaccount_id,
            &request.order_hash,
            &self.config.market_id,
            &request.client_id,
        );
        tracing::debug!(
            order_hash = %request.order_hash,
            cid = %request.client_id,
            "Submitting cancel"
        );

        match self.caller.write(call).await {
            Ok(receipt) => {
                tracing::info!(
                    order_hash = %request.order_hash,
                    tx_hash = ?receipt.tx_hash,
                    "Order cancelled"
                );
                let mut state = self.state.write().await;
                self.on_write_success(&mut state);
                if self.config.cancelled_orders == CancelledOrderPolicy::Remove {
                    let removed = state
                        .orders
                        .remove_cancelled(&request.order_hash, request.client_id.as_str());
                    tracing::debug!(removed, "Dropped cancelled order records");
                }
                Ok(receipt)
            }
            Err(e) => {
                self.record_failure(CANCEL_ORDER_FAILED, &e).await;
                Err(e)
            }
        }
    }

    /// Copy an order's hash and client id into the cancel form.
    pub async fn select_for_cancel(&self, order: &OrderRecord) {
        self.state.write().await.form.select_for_cancel(order);
    }

    /// [`select_for_cancel`](Self::select_for_cancel) by list position.
    pub async fn select_order(&self, index: usize) -> Option<OrderRecord> {
        let mut state = self.state.write().await;
        let order = state.orders.get(index).cloned()?;
        state.form.select_for_cancel(&order);
        Some(order)
    }

    // ── Form-driven submission ───────────────────────────────────────────

    pub async fn update_form(&self, f: impl FnOnce(&mut FormState)) {
        f(&mut self.state.write().await.form);
    }

    pub async fn form(&self) -> FormState {
        self.state.read().await.form.clone()
    }

    pub async fn refresh_balances(&self) -> Result<BalanceView, PanelError> {
        let subaccount_id = self.state.read().await.form.subaccount();
        Ok(self.query_balances(&subaccount_id).await?)
    }

    pub async fn submit_deposit(&self) -> Result<WriteReceipt, PanelError> {
        let request = self.state.read().await.form.deposit_request();
        Ok(self.deposit(&request).await?)
    }

    /// An invalid side is reported like a failed call, and nothing is sent.
    pub async fn submit_create_order(&self) -> Result<OrderRecord, PanelError> {
        let request = self.state.read().await.form.create_order_request();
        let request = match request {
            Ok(r) => r,
            Err(reason) => {
                tracing::warn!(%reason, "Rejected order form");
                self.state
                    .write()
                    .await
                    .notices
                    .error(format!("{}: {}", CREATE_ORDER_FAILED, reason));
                return Err(PanelError::Validation(reason));
            }
        };
        Ok(self.create_order(&request).await?)
    }

    pub async fn submit_cancel_order(&self) -> Result<WriteReceipt, PanelError> {
        let request = self.state.read().await.form.cancel_order_request();
        Ok(self.cancel_order(&request).await?)
    }

    // ── View ─────────────────────────────────────────────────────────────

    pub async fn snapshot(&self) -> PanelState {
        self.state.read().await.clone()
    }

    /// The current error message, if any.
    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.notices.last_error().map(str::to_string)
    }

    pub async fn orders(&self) -> Vec<OrderRecord> {
        self.state.read().await.orders.iter().cloned().collect()
    }

    pub async fn balances(&self) -> BalanceView {
        self.state.read().await.balances.clone()
    }

    pub async fn render(&self) -> String {
        render::render(&*self.state.read().await, &self.config)
    }

    // ── Internal ─────────────────────────────────────────────────────────

    fn on_write_success(&self, state: &mut PanelState) {
        if self.config.clear_error_on_success {
            state.notices.clear_errors();
        }
    }

    async fn record_failure(&self, prefix: &str, error: &CallError) {
        tracing::warn!(operation = prefix, error = %error, "Contract call failed");
        self.state
            .write()
            .await
            .notices
            .error(format!("{}: {}", prefix, error.message()));
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct ContractPanelBuilder {
    config: PanelConfig,
    contract_address: Option<String>,
}

impl ContractPanelBuilder {
    /// Start from an existing config (e.g. one loaded with `PanelConfig::from_json`).
    pub fn config(mut self, config: PanelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn contract_address(mut self, address: &str) -> Self {
        self.contract_address = Some(address.to_string());
        self
    }

    pub fn market_id(mut self, market_id: &str) -> Self {
        self.config.market_id = MarketId::from(market_id);
        self
    }

    pub fn market_label(mut self, label: &str) -> Self {
        self.config.market_label = label.to_string();
        self
    }

    pub fn read_failure(mut self, policy: ReadFailurePolicy) -> Self {
        self.config.read_failure = policy;
        self
    }

    pub fn cancelled_orders(mut self, policy: CancelledOrderPolicy) -> Self {
        self.config.cancelled_orders = policy;
        self
    }

    pub fn deposit_feedback(mut self, feedback: DepositFeedback) -> Self {
        self.config.deposit_feedback = feedback;
        self
    }

    pub fn clear_error_on_success(mut self, clear: bool) -> Self {
        self.config.clear_error_on_success = clear;
        self
    }

    pub fn notice_capacity(mut self, capacity: usize) -> Self {
        self.config.notice_capacity = capacity;
        self
    }

    pub fn build<C: ContractCaller>(self, caller: C) -> Result<ContractPanel<C>, PanelError> {
        let mut config = self.config;
        if let Some(address) = self.contract_address {
            config.contract_address = parse_address(&address)?;
        }
        ContractPanel::new(caller, config)
    }
}
