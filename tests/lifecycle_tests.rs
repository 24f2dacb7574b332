mod common;

use bazaar::domain::money::Money;
use bazaar::domain::order::OrderStatus;
use bazaar::error::MarketError;
use common::{add_sku, in_memory_engine, line, onboard};
use rust_decimal_macros::dec;

#[tokio::test]
async fn state_machine_closure() {
    let engine = in_memory_engine();
    let s1 = add_sku(&engine, "S1", dec!(1.00), 100).await;
    onboard(&engine, "P1", dec!(1000)).await;

    // From Pending, only Fulfilled or Cancelled succeed.
    let order = engine.place_order("buyer-1", &line(s1, 1)).await.unwrap();
    let err = engine
        .set_order_status(order.id, OrderStatus::Shipped)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidTransition { .. }));

    // From Fulfilled, only Shipped succeeds.
    engine
        .set_order_status(order.id, OrderStatus::Fulfilled)
        .await
        .unwrap();
    let err = engine
        .set_order_status(order.id, OrderStatus::Cancelled)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidTransition { .. }));

    // Shipped is terminal.
    engine
        .set_order_status(order.id, OrderStatus::Shipped)
        .await
        .unwrap();
    for next in [
        OrderStatus::Pending,
        OrderStatus::Fulfilled,
        OrderStatus::Shipped,
        OrderStatus::Cancelled,
    ] {
        let err = engine.set_order_status(order.id, next).await.unwrap_err();
        assert!(matches!(err, MarketError::InvalidTransition { .. }));
    }

    // Cancelled is terminal too.
    let other = engine.place_order("buyer-2", &line(s1, 1)).await.unwrap();
    engine
        .set_order_status(other.id, OrderStatus::Cancelled)
        .await
        .unwrap();
    for next in [OrderStatus::Pending, OrderStatus::Fulfilled, OrderStatus::Shipped] {
        let err = engine.set_order_status(other.id, next).await.unwrap_err();
        assert!(matches!(err, MarketError::InvalidTransition { .. }));
    }
}

#[tokio::test]
async fn fulfillment_touches_only_ordered_skus() {
    let engine = in_memory_engine();
    let ordered = add_sku(&engine, "Ordered", dec!(2.00), 10).await;
    let untouched = add_sku(&engine, "Untouched", dec!(3.00), 10).await;
    onboard(&engine, "P1", dec!(1000)).await;

    let order = engine.place_order("buyer-1", &line(ordered, 4)).await.unwrap();
    engine
        .set_order_status(order.id, OrderStatus::Fulfilled)
        .await
        .unwrap();

    let catalog = engine.catalog().await.unwrap();
    let stock_of = |id| catalog.iter().find(|s| s.id == id).unwrap().stock;
    assert_eq!(stock_of(ordered), 6);
    assert_eq!(stock_of(untouched), 10);
}

#[tokio::test]
async fn rejected_transition_writes_nothing() {
    let engine = in_memory_engine();
    let s1 = add_sku(&engine, "S1", dec!(1.00), 10).await;
    onboard(&engine, "P1", dec!(1000)).await;

    let order = engine.place_order("buyer-1", &line(s1, 5)).await.unwrap();
    let err = engine
        .set_order_status(order.id, OrderStatus::Shipped)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::InvalidTransition { .. }));

    // Status and stock are untouched by the rejected edge.
    let stored = engine.orders().await.unwrap()[0].clone();
    assert_eq!(stored.status, OrderStatus::Pending);
    assert_eq!(engine.catalog().await.unwrap()[0].stock, 10);
}

#[tokio::test]
async fn cancellation_keeps_the_debit() {
    let engine = in_memory_engine();
    let s1 = add_sku(&engine, "S1", dec!(10.00), 10).await;
    let p1 = onboard(&engine, "P1", dec!(100)).await;

    let order = engine.place_order("buyer-1", &line(s1, 4)).await.unwrap();
    engine
        .set_order_status(order.id, OrderStatus::Cancelled)
        .await
        .unwrap();

    // The placement debit is not compensated automatically; the operator
    // escape hatch is the documented remedy.
    assert_eq!(
        engine.partners().await.unwrap()[0].available,
        Money::new(dec!(60))
    );
    engine
        .update_partner_terms(
            p1,
            "P1",
            "P1@example.test",
            Money::new(dec!(100)),
            Money::new(dec!(100)),
        )
        .await
        .unwrap();
    assert_eq!(
        engine.partners().await.unwrap()[0].available,
        Money::new(dec!(100))
    );
}

#[tokio::test]
async fn adjust_round_trips_exact_values() {
    let engine = in_memory_engine();
    let s1 = add_sku(&engine, "S1", dec!(10.00), 10).await;

    engine
        .adjust_stock_and_price(s1, 42, Money::new(dec!(19.95)))
        .await
        .unwrap();
    let sku = engine.catalog().await.unwrap()[0].clone();
    assert_eq!(sku.stock, 42);
    assert_eq!(sku.unit_price, Money::new(dec!(19.95)));

    // Declared validation: negative stock and non-positive price refused.
    let err = engine
        .adjust_stock_and_price(s1, -1, Money::new(dec!(19.95)))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::Validation(_)));
    let err = engine
        .adjust_stock_and_price(s1, 1, Money::ZERO)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::Validation(_)));
}
