//! Matching engine core
//!
//! Market registry: maps market ids to their order books, creating a book
//! on first use, and routes submissions and queries to it.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;
use types::clock;
use types::errors::EngineError;
use types::ids::{MarketId, OrderId};
use types::order::{Order, OrderRequest};
use types::trade::Trade;

use crate::book::{OrderBook, Submission};
use crate::snapshot::BookSnapshot;

/// Number of trades returned when a caller does not ask for a limit
pub const DEFAULT_TRADE_LIMIT: usize = 50;

/// Main matching engine
///
/// Book creation is an atomic insert-if-absent on the registry; every
/// other operation runs under the target book's own lock.
#[derive(Debug, Default)]
pub struct MatchingEngine {
    books: DashMap<MarketId, Arc<OrderBook>>,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the book for `market_id`, creating an empty one on first use
    pub fn book(&self, market_id: &MarketId) -> Arc<OrderBook> {
        if let Some(book) = self.books.get(market_id) {
            return Arc::clone(book.value());
        }

        let entry = self.books.entry(market_id.clone()).or_insert_with(|| {
            debug!(market = %market_id, "creating order book");
            Arc::new(OrderBook::new(market_id.clone()))
        });
        Arc::clone(entry.value())
    }

    /// Get the book for `market_id` without creating it
    pub fn get(&self, market_id: &MarketId) -> Option<Arc<OrderBook>> {
        self.books.get(market_id).map(|book| Arc::clone(book.value()))
    }

    /// Submit an order intent, stamped with the current time
    pub fn submit(
        &self,
        market_id: &MarketId,
        request: OrderRequest,
    ) -> Result<Submission, EngineError> {
        self.submit_at(market_id, request, clock::unix_nanos())
    }

    /// Submit an order intent created at `timestamp` (Unix nanos)
    ///
    /// Validation happens before the book is touched, so a rejected order
    /// leaves no trace in any book.
    pub fn submit_at(
        &self,
        market_id: &MarketId,
        request: OrderRequest,
        timestamp: i64,
    ) -> Result<Submission, EngineError> {
        let order = Order::from_request(request, market_id.clone(), timestamp)?;
        self.book(market_id).submit(order)
    }

    /// Get order book snapshot
    pub fn snapshot(&self, market_id: &MarketId) -> BookSnapshot {
        self.book(market_id).snapshot()
    }

    /// The `limit` most recent trades of a market, oldest first
    pub fn recent_trades(&self, market_id: &MarketId, limit: usize) -> Vec<Trade> {
        self.book(market_id).recent_trades(limit)
    }

    /// Find an order in any market
    pub fn lookup_order(&self, order_id: &OrderId) -> Option<Order> {
        // Collect first so no registry shard lock is held while locking books
        let books: Vec<Arc<OrderBook>> = self
            .books
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        books.iter().find_map(|book| book.order(order_id))
    }

    /// Known market ids, sorted
    pub fn markets(&self) -> Vec<MarketId> {
        let mut markets: Vec<MarketId> = self.books.iter().map(|entry| entry.key().clone()).collect();
        markets.sort();
        markets
    }

    pub fn market_count(&self) -> usize {
        self.books.len()
    }
}
