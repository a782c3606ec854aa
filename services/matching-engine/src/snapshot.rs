//! Book snapshot projection
//!
//! Groups the active entries of each queue into price levels, best price
//! first. Built fresh on every call from the live order registry, so fill
//! state is always current.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use types::ids::{MarketId, OrderId};
use types::numeric::{Price, Quantity};
use types::order::Order;

use crate::book::{OrderQueue, PriceLevel, QueueSide};

/// Aggregated view of all four queues of one market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub market_id: MarketId,
    pub yes_bids: Vec<PriceLevel>,
    pub yes_asks: Vec<PriceLevel>,
    pub no_bids: Vec<PriceLevel>,
    pub no_asks: Vec<PriceLevel>,
}

impl BookSnapshot {
    /// True when no side has any resting quantity
    pub fn is_empty(&self) -> bool {
        self.yes_bids.is_empty()
            && self.yes_asks.is_empty()
            && self.no_bids.is_empty()
            && self.no_asks.is_empty()
    }

    /// Iterate over every order shown in the snapshot
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        [&self.yes_bids, &self.yes_asks, &self.no_bids, &self.no_asks]
            .into_iter()
            .flatten()
            .flat_map(|level| level.orders.iter())
    }
}

/// Active orders of a queue in priority order, skipping filled leftovers
fn active<'a>(
    queue: &'a OrderQueue,
    orders: &'a HashMap<OrderId, Order>,
) -> impl Iterator<Item = &'a Order> + 'a {
    queue
        .iter()
        .filter_map(move |key| orders.get(&key.order_id()))
        .filter(|order| !order.remaining_quantity().is_zero())
}

/// Group a queue's active orders into levels, best price first
pub fn aggregate(queue: &OrderQueue, orders: &HashMap<OrderId, Order>) -> Vec<PriceLevel> {
    let mut levels: BTreeMap<Price, PriceLevel> = BTreeMap::new();

    for order in active(queue, orders) {
        levels
            .entry(order.price)
            .or_insert_with(|| PriceLevel::new(order.price))
            .push(order);
    }

    match queue.side() {
        QueueSide::Bid => levels.into_values().rev().collect(),
        QueueSide::Ask => levels.into_values().collect(),
    }
}

/// Best active price of a queue and the remaining quantity resting there
pub fn best_level(
    queue: &OrderQueue,
    orders: &HashMap<OrderId, Order>,
) -> Option<(Price, Quantity)> {
    let mut entries = active(queue, orders);
    let best = entries.next()?;
    let price = best.price;

    let total = entries
        .take_while(|order| order.price == price)
        .map(Order::remaining_quantity)
        .sum::<Quantity>()
        + best.remaining_quantity();

    Some((price, total))
}
