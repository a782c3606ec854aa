//! Error types for the matching engine
//!
//! Validation failures are expected and reported to the caller. An
//! overfill or a queue entry without a registered order is an internal
//! invariant violation and is never recovered.

use thiserror::Error;

use crate::ids::OrderId;
use crate::numeric::Quantity;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Internal invariant violated: {0}")]
    Overfill(#[from] OverfillError),

    #[error("Internal invariant violated: queued order {0} is not registered")]
    UnregisteredOrder(OrderId),
}

/// Malformed order intent, raised before any book mutation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Minimum order quantity is 1, got {0}")]
    InvalidQuantity(i64),

    #[error("Price must be between 0 and 100 cents, got {0}")]
    PriceOutOfRange(i64),

    #[error("Market orders (price 0) are only allowed for SELL")]
    MarketBuyNotAllowed,

    #[error("Invalid side '{0}', must be YES or NO")]
    InvalidSide(String),

    #[error("Invalid order type '{0}', must be BUY or SELL")]
    InvalidOrderType(String),

    #[error("Account id must not be empty")]
    EmptyAccountId,

    #[error("Market id must not be empty")]
    EmptyMarketId,

    #[error("Order for market {order_market} submitted to book {book_market}")]
    MarketMismatch {
        order_market: String,
        book_market: String,
    },

    #[error("Order {0} has already been submitted")]
    DuplicateOrderId(OrderId),

    #[error("Order {0} already carries fills")]
    AlreadyFilled(OrderId),
}

/// Attempt to fill beyond an order's remaining quantity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot fill order {order_id} by {requested}: only {remaining} remaining")]
pub struct OverfillError {
    pub order_id: OrderId,
    pub requested: Quantity,
    pub remaining: Quantity,
}
