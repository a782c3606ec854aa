//! Matching Engine Service
//!
//! Price-time priority matching for binary-outcome prediction markets.
//! Each market owns one [`OrderBook`] with four queues (YES bids, YES asks,
//! NO bids, NO asks); the [`MatchingEngine`] maps market ids to books.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced
//! - Execution at the resting (maker) order's price
//! - No self-trades: matching stops at the first same-account resting order
//! - Market orders (SELL at price 0) never rest
//! - Conservation of quantity

pub mod book;
pub mod engine;
pub mod matching;
pub mod snapshot;

pub use book::{OrderBook, Submission};
pub use engine::MatchingEngine;
pub use snapshot::BookSnapshot;
