//! Priority queue of resting orders
//!
//! Entries are `(priority_price, timestamp, order_id)` keys into the book's
//! order registry, kept in a BTreeSet for deterministic ordering. Bids store
//! the negated price so that ascending key order is best-price-first on
//! both sides. Entries leave the queue only when they are fully filled and
//! at the head.

use std::collections::BTreeSet;
use types::ids::OrderId;
use types::numeric::Price;
use types::order::Order;

/// Which side of the book a queue holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueSide {
    /// Buy orders, highest price first
    Bid,
    /// Sell orders, lowest price first
    Ask,
}

/// Queue ordering key for one resting order
///
/// Field order defines the derived ordering: priority price, then creation
/// time, then id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriorityKey {
    priority_price: i16,
    timestamp: i64,
    order_id: OrderId,
    price: Price,
}

impl PriorityKey {
    pub fn new(side: QueueSide, price: Price, timestamp: i64, order_id: OrderId) -> Self {
        let cents = i16::from(price.cents());
        let priority_price = match side {
            QueueSide::Bid => -cents,
            QueueSide::Ask => cents,
        };

        Self {
            priority_price,
            timestamp,
            order_id,
            price,
        }
    }

    /// Limit price of the resting order
    pub fn price(&self) -> Price {
        self.price
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }
}

/// One side of one outcome's book
#[derive(Debug, Clone)]
pub struct OrderQueue {
    side: QueueSide,
    keys: BTreeSet<PriorityKey>,
}

impl OrderQueue {
    /// Create a new empty queue
    pub fn new(side: QueueSide) -> Self {
        Self {
            side,
            keys: BTreeSet::new(),
        }
    }

    pub fn side(&self) -> QueueSide {
        self.side
    }

    /// Insert a resting order keyed by its price, timestamp and id
    pub fn insert(&mut self, order: &Order) {
        self.keys.insert(PriorityKey::new(
            self.side,
            order.price,
            order.timestamp,
            order.order_id,
        ));
    }

    /// Best-priority entry
    pub fn peek(&self) -> Option<&PriorityKey> {
        self.keys.first()
    }

    /// Remove and return the best-priority entry
    pub fn pop(&mut self) -> Option<PriorityKey> {
        self.keys.pop_first()
    }

    /// Entries in priority order (best first)
    pub fn iter(&self) -> impl Iterator<Item = &PriorityKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
