//! Trade execution records
//!
//! Trades are produced only by the matching engine and never change after
//! creation.

use crate::ids::{AccountId, MarketId, OrderId, TradeId};
use crate::numeric::{Price, Quantity};
use crate::order::{OrderType, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Executed match between a resting (maker) and an incoming (taker) order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    pub sequence: u64, // Per-market monotonic, starts at 1
    pub market_id: MarketId,

    // Account references
    pub buyer_account: AccountId,
    pub seller_account: AccountId,

    // Order references
    pub maker_order_id: OrderId,
    pub taker_order_id: OrderId,
    pub taker_type: OrderType,

    // Trade details
    pub side: Side,
    pub price: Price, // Maker's price
    pub quantity: Quantity,

    pub timestamp: i64, // Unix nanos
}

impl Trade {
    /// Create a new trade record
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sequence: u64,
        market_id: MarketId,
        buyer_account: AccountId,
        seller_account: AccountId,
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        taker_type: OrderType,
        side: Side,
        price: Price,
        quantity: Quantity,
        timestamp: i64,
    ) -> Self {
        Self {
            trade_id: TradeId::new(),
            sequence,
            market_id,
            buyer_account,
            seller_account,
            maker_order_id,
            taker_order_id,
            taker_type,
            side,
            price,
            quantity,
            timestamp,
        }
    }

    /// Dollar value exchanged (price × quantity)
    pub fn notional(&self) -> Decimal {
        self.price.as_dollars() * self.quantity.as_decimal()
    }

    /// Id of the BUY order in this trade
    pub fn buy_order_id(&self) -> OrderId {
        match self.taker_type {
            OrderType::BUY => self.taker_order_id,
            OrderType::SELL => self.maker_order_id,
        }
    }

    /// Id of the SELL order in this trade
    pub fn sell_order_id(&self) -> OrderId {
        match self.taker_type {
            OrderType::BUY => self.maker_order_id,
            OrderType::SELL => self.taker_order_id,
        }
    }

    pub fn is_self_trade(&self) -> bool {
        self.buyer_account == self.seller_account
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_trade(taker_type: OrderType, maker: OrderId, taker: OrderId) -> Trade {
        Trade::new(
            1,
            MarketId::try_new("default_market").unwrap(),
            AccountId::try_new("buyer").unwrap(),
            AccountId::try_new("seller").unwrap(),
            maker,
            taker,
            taker_type,
            Side::YES,
            Price::try_new(60).unwrap(),
            Quantity::new(4),
            1708123456789000000,
        )
    }

    #[test]
    fn test_trade_creation() {
        let trade = create_trade(OrderType::SELL, OrderId::new(), OrderId::new());
        assert_eq!(trade.sequence, 1);
        assert!(!trade.is_self_trade());
    }

    #[test]
    fn test_trade_notional() {
        let trade = create_trade(OrderType::SELL, OrderId::new(), OrderId::new());
        // 4 contracts at 60 cents
        assert_eq!(trade.notional(), Decimal::new(240, 2));
    }

    #[test]
    fn test_buy_sell_order_ids() {
        let maker = OrderId::new();
        let taker = OrderId::new();

        let sell_taker = create_trade(OrderType::SELL, maker, taker);
        assert_eq!(sell_taker.buy_order_id(), maker);
        assert_eq!(sell_taker.sell_order_id(), taker);

        let buy_taker = create_trade(OrderType::BUY, maker, taker);
        assert_eq!(buy_taker.buy_order_id(), taker);
        assert_eq!(buy_taker.sell_order_id(), maker);
    }
}
