//! Order lifecycle types
//!
//! An order is created OPEN with nothing filled, and only the matching
//! engine mutates it afterwards through [`Order::fill`].

use crate::errors::{OverfillError, ValidationError};
use crate::ids::{AccountId, MarketId, OrderId};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome a contract pays out on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    YES,
    NO,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::YES => "YES",
            Side::NO => "NO",
        }
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YES" => Ok(Side::YES),
            "NO" => Ok(Side::NO),
            other => Err(ValidationError::InvalidSide(other.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::BUY => "BUY",
            OrderType::SELL => "SELL",
        }
    }
}

impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(OrderType::BUY),
            "SELL" => Ok(OrderType::SELL),
            other => Err(ValidationError::InvalidOrderType(other.to_string())),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fill state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Nothing filled yet
    Open,
    /// Some but not all of the quantity filled
    PartiallyFilled,
    /// Completely matched (terminal)
    Filled,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Filled)
    }
}

/// Unvalidated order intent as received from a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub account_id: String,
    pub side: Side,
    pub order_type: OrderType,
    /// Cents; 0 requests a market SELL
    pub price: i64,
    pub quantity: i64,
}

/// Order with identity, intent and fill state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub account_id: AccountId,
    pub market_id: MarketId,
    pub side: Side,
    pub order_type: OrderType,
    pub price: Price,
    pub quantity: Quantity,
    pub filled_quantity: Quantity,
    pub status: OrderStatus,
    pub timestamp: i64, // Unix nanos, creation time
}

impl Order {
    /// Create a new OPEN order
    ///
    /// Fails if the quantity is zero or if a BUY carries the market price.
    pub fn new(
        account_id: AccountId,
        market_id: MarketId,
        side: Side,
        order_type: OrderType,
        price: Price,
        quantity: Quantity,
        timestamp: i64,
    ) -> Result<Self, ValidationError> {
        let order = Self {
            order_id: OrderId::new(),
            account_id,
            market_id,
            side,
            order_type,
            price,
            quantity,
            filled_quantity: Quantity::zero(),
            status: OrderStatus::Open,
            timestamp,
        };
        order.validate()?;
        Ok(order)
    }

    /// Check that the order is fit for submission: non-zero size, no BUY at
    /// the market price, and no fills yet
    ///
    /// `Order` fields are public, so the book re-checks orders that were not
    /// built through [`Order::new`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.quantity.is_zero() {
            return Err(ValidationError::InvalidQuantity(0));
        }
        if self.price.is_market() && self.order_type != OrderType::SELL {
            return Err(ValidationError::MarketBuyNotAllowed);
        }
        if !self.filled_quantity.is_zero() || self.status != OrderStatus::Open {
            return Err(ValidationError::AlreadyFilled(self.order_id));
        }
        Ok(())
    }

    /// Validate a raw request and build the order for `market_id`
    pub fn from_request(
        request: OrderRequest,
        market_id: MarketId,
        timestamp: i64,
    ) -> Result<Self, ValidationError> {
        let quantity = Quantity::try_new(request.quantity)?;
        let price = Price::try_new(request.price)?;
        let account_id = AccountId::try_new(request.account_id)?;

        Self::new(
            account_id,
            market_id,
            request.side,
            request.order_type,
            price,
            quantity,
            timestamp,
        )
    }

    pub fn remaining_quantity(&self) -> Quantity {
        self.quantity - self.filled_quantity
    }

    /// Market orders execute against resting liquidity and never rest
    pub fn is_market_order(&self) -> bool {
        self.price.is_market()
    }

    pub fn is_buy(&self) -> bool {
        self.order_type == OrderType::BUY
    }

    pub fn is_filled(&self) -> bool {
        self.remaining_quantity().is_zero()
    }

    /// Apply a fill and recompute status
    pub fn fill(&mut self, quantity: Quantity) -> Result<(), OverfillError> {
        let remaining = self.remaining_quantity();
        if quantity > remaining {
            return Err(OverfillError {
                order_id: self.order_id,
                requested: quantity,
                remaining,
            });
        }

        self.filled_quantity += quantity;
        self.status = if self.is_filled() {
            OrderStatus::Filled
        } else {
            OrderStatus::PartiallyFilled
        };
        Ok(())
    }
}
