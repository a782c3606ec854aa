//! Per-market order book
//!
//! Owns the four priority queues, the registry of every order submitted to
//! the market and the append-only trade ledger. All of it sits behind one
//! mutex: submissions and reads on the same market are serialized, distinct
//! markets never contend.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};
use types::errors::{EngineError, ValidationError};
use types::ids::{MarketId, OrderId};
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderType, Side};
use types::trade::Trade;

use super::order_queue::{OrderQueue, QueueSide};
use crate::matching::{crossing, TradeExecutor};
use crate::snapshot::{self, BookSnapshot};

/// Result of submitting an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// The submitted order with its post-matching fill state
    pub order: Order,
    /// Trades generated, in generation order
    pub trades: Vec<Trade>,
}

/// Order book for a single market
#[derive(Debug)]
pub struct OrderBook {
    market_id: MarketId,
    state: Mutex<BookState>,
}

#[derive(Debug)]
struct BookState {
    queues: Queues,
    orders: HashMap<OrderId, Order>,
    trades: Vec<Trade>,
    executor: TradeExecutor,
}

#[derive(Debug)]
struct Queues {
    yes_bids: OrderQueue,
    yes_asks: OrderQueue,
    no_bids: OrderQueue,
    no_asks: OrderQueue,
}

impl Queues {
    fn new() -> Self {
        Self {
            yes_bids: OrderQueue::new(QueueSide::Bid),
            yes_asks: OrderQueue::new(QueueSide::Ask),
            no_bids: OrderQueue::new(QueueSide::Bid),
            no_asks: OrderQueue::new(QueueSide::Ask),
        }
    }

    /// (opposing queue, same-side queue) for an incoming order
    fn route(&mut self, side: Side, order_type: OrderType) -> (&mut OrderQueue, &mut OrderQueue) {
        match (side, order_type) {
            (Side::YES, OrderType::BUY) => (&mut self.yes_asks, &mut self.yes_bids),
            (Side::YES, OrderType::SELL) => (&mut self.yes_bids, &mut self.yes_asks),
            (Side::NO, OrderType::BUY) => (&mut self.no_asks, &mut self.no_bids),
            (Side::NO, OrderType::SELL) => (&mut self.no_bids, &mut self.no_asks),
        }
    }

    fn get(&self, side: Side, queue_side: QueueSide) -> &OrderQueue {
        match (side, queue_side) {
            (Side::YES, QueueSide::Bid) => &self.yes_bids,
            (Side::YES, QueueSide::Ask) => &self.yes_asks,
            (Side::NO, QueueSide::Bid) => &self.no_bids,
            (Side::NO, QueueSide::Ask) => &self.no_asks,
        }
    }
}

impl OrderBook {
    /// Create a new empty book for `market_id`
    pub fn new(market_id: MarketId) -> Self {
        Self {
            market_id,
            state: Mutex::new(BookState {
                queues: Queues::new(),
                orders: HashMap::new(),
                trades: Vec::new(),
                executor: TradeExecutor::default(),
            }),
        }
    }

    pub fn market_id(&self) -> &MarketId {
        &self.market_id
    }

    /// Submit an order to the book
    ///
    /// Matches the order against the opposing queue, rests any limit
    /// remainder, and registers the order for lookup. A market order's
    /// unfilled remainder is dropped.
    ///
    /// Rejects, before any mutation, an order for another market, an order
    /// that fails [`Order::validate`], and an id already in the registry.
    pub fn submit(&self, mut order: Order) -> Result<Submission, EngineError> {
        if order.market_id != self.market_id {
            return Err(ValidationError::MarketMismatch {
                order_market: order.market_id.to_string(),
                book_market: self.market_id.to_string(),
            }
            .into());
        }
        order.validate()?;

        let mut guard = self.state.lock();
        let state = &mut *guard;

        if state.orders.contains_key(&order.order_id) {
            return Err(ValidationError::DuplicateOrderId(order.order_id).into());
        }

        let (opposing, same_side) = state.queues.route(order.side, order.order_type);
        let mut trades = Vec::new();

        let crossed = cross(
            &self.market_id,
            &mut order,
            opposing,
            &mut state.orders,
            &mut state.executor,
            &mut state.trades,
            &mut trades,
        );

        if let Err(err) = crossed {
            error!(market = %self.market_id, order_id = %order.order_id, %err, "matching invariant violated");
            state.orders.insert(order.order_id, order);
            return Err(err);
        }

        if !order.is_filled() {
            if order.is_market_order() {
                debug!(
                    market = %self.market_id,
                    order_id = %order.order_id,
                    dropped = %order.remaining_quantity(),
                    "market order remainder discarded"
                );
            } else {
                same_side.insert(&order);
            }
        }

        state.orders.insert(order.order_id, order.clone());

        Ok(Submission { order, trades })
    }

    /// Aggregated view of all four queues
    pub fn snapshot(&self) -> BookSnapshot {
        let state = self.state.lock();
        let queues = &state.queues;

        BookSnapshot {
            market_id: self.market_id.clone(),
            yes_bids: snapshot::aggregate(&queues.yes_bids, &state.orders),
            yes_asks: snapshot::aggregate(&queues.yes_asks, &state.orders),
            no_bids: snapshot::aggregate(&queues.no_bids, &state.orders),
            no_asks: snapshot::aggregate(&queues.no_asks, &state.orders),
        }
    }

    /// The `limit` most recent trades, oldest first
    pub fn recent_trades(&self, limit: usize) -> Vec<Trade> {
        let state = self.state.lock();
        let start = state.trades.len().saturating_sub(limit);
        state.trades[start..].to_vec()
    }

    /// Look up any order ever submitted to this market
    pub fn order(&self, order_id: &OrderId) -> Option<Order> {
        self.state.lock().orders.get(order_id).cloned()
    }

    pub fn order_count(&self) -> usize {
        self.state.lock().orders.len()
    }

    pub fn trade_count(&self) -> usize {
        self.state.lock().trades.len()
    }

    /// Highest active bid on an outcome with its resting quantity
    pub fn best_bid(&self, side: Side) -> Option<(Price, Quantity)> {
        let state = self.state.lock();
        snapshot::best_level(state.queues.get(side, QueueSide::Bid), &state.orders)
    }

    /// Lowest active ask on an outcome with its resting quantity
    pub fn best_ask(&self, side: Side) -> Option<(Price, Quantity)> {
        let state = self.state.lock();
        snapshot::best_level(state.queues.get(side, QueueSide::Ask), &state.orders)
    }
}

/// Crossing loop: match `incoming` against the head of `opposing` until the
/// order is filled, the queue is empty, prices stop crossing, or the head
/// belongs to the same account.
fn cross(
    market_id: &MarketId,
    incoming: &mut Order,
    opposing: &mut OrderQueue,
    orders: &mut HashMap<OrderId, Order>,
    executor: &mut TradeExecutor,
    ledger: &mut Vec<Trade>,
    trades: &mut Vec<Trade>,
) -> Result<(), EngineError> {
    while !incoming.is_filled() {
        let Some(head) = opposing.peek().copied() else {
            break;
        };

        // Every queued order is in the registry, which never removes entries
        let resting = orders
            .get_mut(&head.order_id())
            .ok_or(EngineError::UnregisteredOrder(head.order_id()))?;

        if resting.account_id == incoming.account_id {
            debug!(
                market = %market_id,
                account = %incoming.account_id,
                resting_order = %resting.order_id,
                "self-trade guard stopped matching"
            );
            break;
        }

        if !crossing::incoming_can_match(incoming, head.price()) {
            break;
        }

        let quantity = incoming
            .remaining_quantity()
            .min(resting.remaining_quantity());

        incoming.fill(quantity)?;
        resting.fill(quantity)?;

        let trade = executor.execute_trade(market_id, incoming, resting, quantity);
        trace!(
            market = %market_id,
            sequence = trade.sequence,
            price = %trade.price,
            quantity = %trade.quantity,
            "trade executed"
        );

        if resting.is_filled() {
            opposing.pop();
        }

        ledger.push(trade.clone());
        trades.push(trade);
    }

    Ok(())
}
