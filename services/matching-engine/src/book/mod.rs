//! Order book infrastructure module
//!
//! Contains the priority queues, aggregated price levels and the per-market
//! order book that ties them together.

pub mod order_book;
pub mod order_queue;
pub mod price_level;

pub use order_book::{OrderBook, Submission};
pub use order_queue::{OrderQueue, PriorityKey, QueueSide};
pub use price_level::PriceLevel;
