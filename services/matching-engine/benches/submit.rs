//! Submission Benchmark
//!
//! Measures `OrderBook::submit` for:
//! - Resting limit orders into a deep book
//! - Aggressive orders sweeping several price levels
//! - Market sells against a prepared bid ladder

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use matching_engine::OrderBook;
use types::ids::{AccountId, MarketId};
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderType, Side};

const DEPTH: i64 = 99;

fn market() -> MarketId {
    MarketId::try_new("bench").unwrap()
}

fn order(account: &str, order_type: OrderType, price: i64, quantity: u64, timestamp: i64) -> Order {
    Order::new(
        AccountId::try_new(account).unwrap(),
        market(),
        Side::YES,
        order_type,
        Price::try_new(price).unwrap(),
        Quantity::new(quantity),
        timestamp,
    )
    .unwrap()
}

/// Book with one 10-lot bid at every price from 1 to 99 cents
fn bid_ladder() -> OrderBook {
    let book = OrderBook::new(market());
    for price in 1..=DEPTH {
        book.submit(order("maker", OrderType::BUY, price, 10, price)).unwrap();
    }
    book
}

fn bench_resting(c: &mut Criterion) {
    c.bench_function("submit_resting_limit", |b| {
        let book = bid_ladder();
        let mut ts = 1_000;
        b.iter(|| {
            ts += 1;
            let price = ts % DEPTH + 1;
            black_box(book.submit(order("maker", OrderType::BUY, price, 1, ts)).unwrap());
        });
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("submit_sweep_ten_levels", |b| {
        b.iter_batched(
            bid_ladder,
            |book| {
                let sell = order("taker", OrderType::SELL, 90, 100, 10_000);
                black_box(book.submit(sell).unwrap())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_market_sell(c: &mut Criterion) {
    c.bench_function("submit_market_sell", |b| {
        b.iter_batched(
            bid_ladder,
            |book| {
                let sell = order("taker", OrderType::SELL, 0, 250, 10_000);
                black_box(book.submit(sell).unwrap())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_resting, bench_sweep, bench_market_sell);
criterion_main!(benches);
