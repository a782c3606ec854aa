//! Crossing detection logic
//!
//! Determines whether an incoming order can trade against a resting price

use types::numeric::Price;
use types::order::{Order, OrderType};

/// Check if a bid and ask can match at given prices
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Check if an incoming order crosses the resting order price
///
/// A BUY crosses when its limit is at or above the resting ask, a SELL when
/// its limit is at or below the resting bid. Market orders cross any price.
pub fn incoming_can_match(incoming: &Order, resting_price: Price) -> bool {
    if incoming.is_market_order() {
        return true;
    }

    match incoming.order_type {
        OrderType::BUY => can_match(incoming.price, resting_price),
        OrderType::SELL => can_match(resting_price, incoming.price),
    }
}
