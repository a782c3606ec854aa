//! Property-based matching invariants using `proptest`.
//!
//! Random order flows from a handful of accounts across both outcomes,
//! checking conservation, self-trade prevention, maker pricing, market
//! order resting semantics and snapshot shape after every run.

use std::collections::HashMap;

use matching_engine::{BookSnapshot, MatchingEngine, Submission};
use proptest::prelude::*;
use types::ids::{MarketId, OrderId};
use types::numeric::Quantity;
use types::order::{Order, OrderRequest, OrderStatus, OrderType, Side};
use types::trade::Trade;

const ACCOUNTS: [&str; 3] = ["alice", "bob", "carol"];

fn market() -> MarketId {
    MarketId::try_new("prop").unwrap()
}

fn order_request() -> impl Strategy<Value = OrderRequest> {
    (
        0usize..ACCOUNTS.len(),
        prop_oneof![Just(Side::YES), Just(Side::NO)],
        prop_oneof![Just(OrderType::BUY), Just(OrderType::SELL)],
        0i64..=100,
        1i64..=25,
    )
        .prop_map(|(account, side, order_type, price, quantity)| {
            // A BUY at the market price is invalid; keep the flow valid
            let price = if order_type == OrderType::BUY && price == 0 { 1 } else { price };
            OrderRequest {
                account_id: ACCOUNTS[account].to_string(),
                side,
                order_type,
                price,
                quantity,
            }
        })
}

fn run(requests: Vec<OrderRequest>) -> (MatchingEngine, Vec<Submission>) {
    let engine = MatchingEngine::new();
    let submissions = requests
        .into_iter()
        .enumerate()
        .map(|(i, request)| engine.submit_at(&market(), request, i as i64).unwrap())
        .collect();
    (engine, submissions)
}

fn final_orders(engine: &MatchingEngine, submissions: &[Submission]) -> HashMap<OrderId, Order> {
    submissions
        .iter()
        .map(|s| {
            let order = engine.lookup_order(&s.order.order_id).unwrap();
            (order.order_id, order)
        })
        .collect()
}

fn all_trades(submissions: &[Submission]) -> Vec<Trade> {
    submissions.iter().flat_map(|s| s.trades.clone()).collect()
}

fn check_snapshot_shape(snapshot: &BookSnapshot) {
    for bids in [&snapshot.yes_bids, &snapshot.no_bids] {
        for pair in bids.windows(2) {
            assert!(pair[0].price > pair[1].price, "bids must be best (highest) first");
        }
    }
    for asks in [&snapshot.yes_asks, &snapshot.no_asks] {
        for pair in asks.windows(2) {
            assert!(pair[0].price < pair[1].price, "asks must be best (lowest) first");
        }
    }
    for level in [
        &snapshot.yes_bids,
        &snapshot.yes_asks,
        &snapshot.no_bids,
        &snapshot.no_asks,
    ]
    .into_iter()
    .flatten()
    {
        let sum: Quantity = level.orders.iter().map(Order::remaining_quantity).sum();
        assert_eq!(level.total_quantity, sum);
        assert!(level.orders.iter().all(|o| o.price == level.price));
        assert!(level.orders.iter().all(|o| !o.is_filled()));
    }
}

proptest! {
    #[test]
    fn fills_are_conserved(requests in prop::collection::vec(order_request(), 1..80)) {
        let (engine, submissions) = run(requests);
        let orders = final_orders(&engine, &submissions);

        let mut traded: HashMap<OrderId, u64> = HashMap::new();
        for trade in all_trades(&submissions) {
            *traded.entry(trade.buy_order_id()).or_default() += trade.quantity.get();
            *traded.entry(trade.sell_order_id()).or_default() += trade.quantity.get();
        }

        for order in orders.values() {
            let filled = traded.get(&order.order_id).copied().unwrap_or(0);
            prop_assert_eq!(order.filled_quantity.get(), filled);
            prop_assert!(order.filled_quantity <= order.quantity);

            let expected = if order.filled_quantity.is_zero() {
                OrderStatus::Open
            } else if order.is_filled() {
                OrderStatus::Filled
            } else {
                OrderStatus::PartiallyFilled
            };
            prop_assert_eq!(order.status, expected);
        }
    }

    #[test]
    fn trades_never_self_match_and_use_maker_price(
        requests in prop::collection::vec(order_request(), 1..80)
    ) {
        let (engine, submissions) = run(requests);
        let orders = final_orders(&engine, &submissions);

        for trade in all_trades(&submissions) {
            prop_assert!(!trade.is_self_trade());

            let maker = &orders[&trade.maker_order_id];
            let taker = &orders[&trade.taker_order_id];
            prop_assert_eq!(trade.price, maker.price);
            prop_assert_eq!(trade.side, maker.side);
            prop_assert_eq!(maker.side, taker.side);
            prop_assert!(maker.order_type != taker.order_type);
            prop_assert!(maker.timestamp < taker.timestamp);
            prop_assert!(!maker.is_market_order());
        }
    }

    #[test]
    fn aggressor_receives_its_limit_or_better(
        requests in prop::collection::vec(order_request(), 1..80)
    ) {
        let (engine, submissions) = run(requests);
        let orders = final_orders(&engine, &submissions);

        for trade in all_trades(&submissions) {
            let taker = &orders[&trade.taker_order_id];
            if taker.is_market_order() {
                continue;
            }
            match taker.order_type {
                OrderType::BUY => prop_assert!(trade.price <= taker.price),
                OrderType::SELL => prop_assert!(trade.price >= taker.price),
            }
        }
    }

    #[test]
    fn market_orders_never_rest(requests in prop::collection::vec(order_request(), 1..80)) {
        let (engine, submissions) = run(requests);
        let snapshot = engine.snapshot(&market());

        for order in snapshot.orders() {
            prop_assert!(!order.is_market_order());
        }

        // Every limit order with quantity left is visible exactly once
        let shown: Vec<OrderId> = snapshot.orders().map(|o| o.order_id).collect();
        for order in final_orders(&engine, &submissions).values() {
            let expected = usize::from(!order.is_filled() && !order.is_market_order());
            prop_assert_eq!(shown.iter().filter(|id| **id == order.order_id).count(), expected);
        }
    }

    #[test]
    fn snapshot_is_ordered_and_idempotent(
        requests in prop::collection::vec(order_request(), 1..80)
    ) {
        let (engine, _) = run(requests);
        let first = engine.snapshot(&market());
        let second = engine.snapshot(&market());

        check_snapshot_shape(&first);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn trade_sequence_and_time_increase(
        requests in prop::collection::vec(order_request(), 1..80)
    ) {
        let (engine, _) = run(requests);
        let trades = engine.recent_trades(&market(), usize::MAX);

        for (i, trade) in trades.iter().enumerate() {
            prop_assert_eq!(trade.sequence, i as u64 + 1);
        }
        for pair in trades.windows(2) {
            prop_assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }
}
