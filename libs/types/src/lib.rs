//! Types library for the binary prediction-market exchange
//!
//! Core records shared by the matching engine and the gateway. Every
//! market trades two outcomes (YES and NO), priced in integer cents.
//!
//! # Modules
//! - `ids`: Unique identifiers (OrderId, TradeId, AccountId, MarketId)
//! - `numeric`: Cent prices and contract quantities
//! - `order`: Order intent and fill state
//! - `trade`: Trade execution records
//! - `errors`: Error taxonomy
//! - `clock`: Wall-clock timestamps in Unix nanos

pub mod clock;
pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
