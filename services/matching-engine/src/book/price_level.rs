//! Aggregated price level
//!
//! A price level groups the active resting orders at one price for a book
//! snapshot. Orders keep their queue (time priority) order.

use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};
use types::order::Order;

/// Orders resting at one price, with their summed remaining quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: Price,
    pub total_quantity: Quantity,
    pub orders: Vec<Order>,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: Price) -> Self {
        Self {
            price,
            total_quantity: Quantity::zero(),
            orders: Vec::new(),
        }
    }

    /// Append an order at the back of the level
    pub fn push(&mut self, order: &Order) {
        self.total_quantity += order.remaining_quantity();
        self.orders.push(order.clone());
    }

    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::{AccountId, MarketId};
    use types::order::{OrderType, Side};

    fn create_order(quantity: u64) -> Order {
        Order::new(
            AccountId::try_new("maker").unwrap(),
            MarketId::try_new("default_market").unwrap(),
            Side::NO,
            OrderType::BUY,
            Price::try_new(25).unwrap(),
            Quantity::new(quantity),
            1708123456789000000,
        )
        .unwrap()
    }

    #[test]
    fn test_price_level_push() {
        let mut level = PriceLevel::new(Price::try_new(25).unwrap());
        assert!(level.is_empty());

        level.push(&create_order(3));
        level.push(&create_order(4));

        assert_eq!(level.order_count(), 2);
        assert_eq!(level.total_quantity(), Quantity::new(7));
    }

    #[test]
    fn test_price_level_counts_remaining_only() {
        let mut order = create_order(10);
        order.fill(Quantity::new(6)).unwrap();

        let mut level = PriceLevel::new(order.price);
        level.push(&order);

        assert_eq!(level.total_quantity(), Quantity::new(4));
        assert_eq!(level.orders[0].filled_quantity, Quantity::new(6));
    }
}
