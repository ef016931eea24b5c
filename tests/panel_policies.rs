//! Configurable panel behaviors: read failures, cancelled orders, deposit
//! feedback, notice handling and form-driven submission.
//!
//! Run: cargo test --test panel_policies

mod common;

use common::{balances_return, e18, order_created, MockCaller};
use exchange_panel::prelude::*;

fn sub() -> SubaccountId {
    SubaccountId::from("0xABC-0")
}

// ============================================================================
// Read failure policy
// ============================================================================

#[tokio::test]
async fn last_known_value_keeps_previous_balances() {
    let caller = MockCaller::new();
    caller.push_read(Ok(balances_return(&[("inj", e18(3))])));
    caller.push_read(Err(CallError::Transport("timeout".into())));
    let panel = ContractPanel::builder()
        .read_failure(ReadFailurePolicy::LastKnownValue)
        .build(caller)
        .unwrap();

    panel.query_balances(&sub()).await.unwrap();
    assert!(panel.query_balances(&sub()).await.is_err());

    assert_eq!(panel.balances().await.lines(), vec!["inj: 3.0"]);
    assert_eq!(panel.last_error().await, None);
}

#[tokio::test]
async fn error_banner_reports_read_failures() {
    let caller = MockCaller::new();
    caller.push_read(Ok(balances_return(&[("inj", e18(3))])));
    caller.push_read(Err(CallError::Transport("timeout".into())));
    let panel = ContractPanel::builder()
        .read_failure(ReadFailurePolicy::ErrorBanner)
        .build(caller)
        .unwrap();

    panel.query_balances(&sub()).await.unwrap();
    assert!(panel.query_balances(&sub()).await.is_err());

    assert!(panel.balances().await.is_empty());
    assert_eq!(
        panel.last_error().await.as_deref(),
        Some("查询余额失败: timeout")
    );
}

#[tokio::test]
async fn undecodable_balances_count_as_read_failure() {
    let caller = MockCaller::new();
    caller.push_read(Ok(alloy_primitives::Bytes::from(vec![1, 2, 3])));
    let panel = ContractPanel::builder()
        .read_failure(ReadFailurePolicy::ErrorBanner)
        .build(caller)
        .unwrap();

    let err = panel.query_balances(&sub()).await.unwrap_err();
    assert!(matches!(err, CallError::Decode(_)));
    assert!(panel
        .last_error()
        .await
        .unwrap()
        .starts_with("查询余额失败: "));
}

// ============================================================================
// Cancelled orders
// ============================================================================

#[tokio::test]
async fn remove_policy_drops_cancelled_order() {
    let caller = MockCaller::new();
    caller.push_write(Ok(order_created("0x01")));
    caller.push_write(Ok(order_created("0x02")));
    let panel = ContractPanel::builder()
        .cancelled_orders(CancelledOrderPolicy::Remove)
        .build(caller)
        .unwrap();

    panel
        .update_form(|f| {
            f.subaccount_id = "0xABC-0".into();
            f.price = "1".into();
            f.quantity = "1".into();
        })
        .await;
    panel.submit_create_order().await.unwrap();
    panel.submit_create_order().await.unwrap();

    let first = panel.select_order(0).await.unwrap();
    assert_eq!(panel.form().await.order_hash, "0x01");
    assert_eq!(panel.form().await.client_id, first.client_id.as_str());

    panel.submit_cancel_order().await.unwrap();

    let orders = panel.orders().await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_hash, "0x02");
}

#[tokio::test]
async fn failed_cancel_never_removes() {
    let caller = MockCaller::new();
    caller.push_write(Ok(order_created("0x01")));
    caller.push_write(Err(CallError::Reverted("order not found".into())));
    let panel = ContractPanel::builder()
        .cancelled_orders(CancelledOrderPolicy::Remove)
        .build(caller)
        .unwrap();

    panel.submit_create_order().await.unwrap();
    panel.select_order(0).await.unwrap();
    assert!(panel.submit_cancel_order().await.is_err());

    assert_eq!(panel.orders().await.len(), 1);
    assert_eq!(
        panel.last_error().await.as_deref(),
        Some("取消订单失败: order not found")
    );
}

#[tokio::test]
async fn select_order_out_of_range_is_noop() {
    let panel = ContractPanel::builder().build(MockCaller::new()).unwrap();
    assert!(panel.select_order(3).await.is_none());
    assert!(panel.form().await.order_hash.is_empty());
}

// ============================================================================
// Deposit feedback + notices
// ============================================================================

#[tokio::test]
async fn deposit_notify_confirms_success() {
    let panel = ContractPanel::builder()
        .deposit_feedback(DepositFeedback::Notify)
        .build(MockCaller::new())
        .unwrap();

    panel
        .update_form(|f| {
            f.subaccount_id = "0xABC-0".into();
            f.amount = "1.25".into();
        })
        .await;
    panel.submit_deposit().await.unwrap();

    let state = panel.snapshot().await;
    let notice = state.notices.iter().last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "存款成功: 1.25 inj");
    assert_eq!(panel.last_error().await, None);
}

#[tokio::test]
async fn deposit_notify_keeps_previous_error() {
    let caller = MockCaller::new();
    caller.push_write(Err(CallError::Reverted("paused".into())));
    let panel = ContractPanel::builder()
        .deposit_feedback(DepositFeedback::Notify)
        .build(caller)
        .unwrap();

    assert!(panel.submit_deposit().await.is_err());
    panel.submit_deposit().await.unwrap();

    assert_eq!(panel.last_error().await.as_deref(), Some("存款失败: paused"));
    assert!(panel.render().await.contains("存款失败: paused"));
}

#[tokio::test]
async fn deposit_notify_with_clearing_shows_success() {
    let caller = MockCaller::new();
    caller.push_write(Err(CallError::Reverted("paused".into())));
    let panel = ContractPanel::builder()
        .deposit_feedback(DepositFeedback::Notify)
        .clear_error_on_success(true)
        .build(caller)
        .unwrap();

    let _ = panel.submit_deposit().await;
    panel.submit_deposit().await.unwrap();

    let state = panel.snapshot().await;
    assert_eq!(panel.last_error().await, None);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices.iter().last().unwrap().level, NoticeLevel::Success);
}

#[tokio::test]
async fn clear_error_on_success() {
    let caller = MockCaller::new();
    caller.push_write(Err(CallError::Reverted("paused".into())));
    let panel = ContractPanel::builder()
        .clear_error_on_success(true)
        .build(caller)
        .unwrap();

    let _ = panel.submit_deposit().await;
    assert!(panel.last_error().await.is_some());

    panel.submit_deposit().await.unwrap();
    assert_eq!(panel.last_error().await, None);
}

#[tokio::test]
async fn notice_list_keeps_concurrent_failures() {
    let caller = MockCaller::new();
    caller.push_write(Err(CallError::Reverted("a".into())));
    caller.push_write(Err(CallError::Reverted("b".into())));
    caller.push_write(Err(CallError::Reverted("c".into())));
    let panel = ContractPanel::builder()
        .notice_capacity(2)
        .build(caller)
        .unwrap();

    let _ = tokio::join!(
        panel.submit_deposit(),
        panel.submit_cancel_order(),
        panel.submit_create_order()
    );

    let state = panel.snapshot().await;
    assert_eq!(state.notices.len(), 2);
    assert!(state
        .notices
        .iter()
        .all(|n| n.level == NoticeLevel::Error));
}

// ============================================================================
// Form-driven submission
// ============================================================================

#[tokio::test]
async fn invalid_side_is_rejected_before_calling() {
    let panel = ContractPanel::builder().build(MockCaller::new()).unwrap();
    panel.update_form(|f| f.order_side = "3".into()).await;

    let err = panel.submit_create_order().await.unwrap_err();
    assert!(matches!(err, PanelError::Validation(_)));
    assert!(panel.caller().calls().is_empty());
    assert_eq!(
        panel.last_error().await.as_deref(),
        Some("创建订单失败: invalid order side: 3")
    );
}

#[tokio::test]
async fn refresh_uses_form_subaccount() {
    let caller = MockCaller::new();
    caller.push_read(Ok(balances_return(&[("inj", e18(2))])));
    let panel = ContractPanel::builder().build(caller).unwrap();

    panel.update_form(|f| f.subaccount_id = "0xABC-1".into()).await;
    let view = panel.refresh_balances().await.unwrap();
    assert_eq!(view.lines(), vec!["inj: 2.0"]);

    let decoded = panel
        .caller()
        .last_call()
        .decode::<IExchangeDemo::subaccountBalancesCall>()
        .unwrap();
    assert_eq!(decoded.subaccountId, "0xABC-1");
}

#[tokio::test]
async fn render_shows_orders_and_error() {
    let caller = MockCaller::new();
    caller.push_write(Ok(order_created("0xdeadbeef")));
    caller.push_write(Err(CallError::Reverted("insufficient funds".into())));
    let panel = ContractPanel::builder().build(caller).unwrap();

    let record = panel.submit_create_order().await.unwrap();
    let _ = panel.submit_create_order().await;

    let text = panel.render().await;
    assert!(text.starts_with("Injective 现货市场 (INJ/USDT)\n创建订单失败: insufficient funds\n"));
    assert!(text.contains("订单哈希: 0xdeadbeef"));
    assert!(text.contains(&format!("CID: {}", record.client_id)));
    assert!(!text.contains(NO_ORDERS_PLACEHOLDER));
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn builder_rejects_bad_address() {
    let result = ContractPanel::builder()
        .contract_address("0xnothex")
        .build(MockCaller::new());
    assert!(matches!(result, Err(PanelError::Config(_))));
}

#[test]
fn builder_accepts_config() {
    let config = PanelConfig::from_json(r#"{"market_id": "0xabc", "market_label": "ATOM/USDT"}"#)
        .unwrap();
    let panel = ContractPanel::builder()
        .config(config)
        .contract_address("0x0000000000000000000000000000000000000001")
        .build(MockCaller::new())
        .unwrap();
    assert_eq!(panel.market_id().as_str(), "0xabc");
    assert_eq!(panel.config().market_label, "ATOM/USDT");
}
