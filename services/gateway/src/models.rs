use matching_engine::book::PriceLevel;
use matching_engine::{BookSnapshot, Submission};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::ValidationError;
use types::ids::MarketId;
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderRequest};
use types::trade::Trade;

pub const DEFAULT_MARKET: &str = "default_market";

fn default_market() -> String {
    DEFAULT_MARKET.to_string()
}

/// Body of `POST /orders`
///
/// `side` and `order_type` stay strings here so an unknown value is
/// reported as a validation error rather than a body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub account_id: String,
    #[serde(default = "default_market")]
    pub market_id: String,
    pub side: String,
    pub order_type: String,
    pub price: i64,
    pub quantity: i64,
}

impl CreateOrderRequest {
    pub fn into_parts(self) -> Result<(MarketId, OrderRequest), ValidationError> {
        let market_id = MarketId::try_new(self.market_id)?;
        let request = OrderRequest {
            account_id: self.account_id,
            side: self.side.parse()?,
            order_type: self.order_type.parse()?,
            price: self.price,
            quantity: self.quantity,
        };
        Ok((market_id, request))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    #[serde(flatten)]
    pub order: Order,
    pub remaining_quantity: Quantity,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            order: order.clone(),
            remaining_quantity: order.remaining_quantity(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TradeResponse {
    #[serde(flatten)]
    pub trade: Trade,
    pub notional: Decimal,
}

impl From<&Trade> for TradeResponse {
    fn from(trade: &Trade) -> Self {
        Self {
            trade: trade.clone(),
            notional: trade.notional(),
        }
    }
}

/// Result of `POST /orders`: the order after matching and its trades
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOrderResponse {
    pub order: OrderResponse,
    pub trades: Vec<TradeResponse>,
}

impl From<&Submission> for SubmitOrderResponse {
    fn from(submission: &Submission) -> Self {
        Self {
            order: (&submission.order).into(),
            trades: submission.trades.iter().map(TradeResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceLevelResponse {
    pub price: Price,
    pub total_quantity: Quantity,
    pub orders: Vec<OrderResponse>,
}

impl From<&PriceLevel> for PriceLevelResponse {
    fn from(level: &PriceLevel) -> Self {
        Self {
            price: level.price,
            total_quantity: level.total_quantity,
            orders: level.orders.iter().map(OrderResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderBookResponse {
    pub market_id: MarketId,
    pub yes_bids: Vec<PriceLevelResponse>,
    pub yes_asks: Vec<PriceLevelResponse>,
    pub no_bids: Vec<PriceLevelResponse>,
    pub no_asks: Vec<PriceLevelResponse>,
}

fn levels(levels: &[PriceLevel]) -> Vec<PriceLevelResponse> {
    levels.iter().map(PriceLevelResponse::from).collect()
}

impl From<&BookSnapshot> for OrderBookResponse {
    fn from(snapshot: &BookSnapshot) -> Self {
        Self {
            market_id: snapshot.market_id.clone(),
            yes_bids: levels(&snapshot.yes_bids),
            yes_asks: levels(&snapshot.yes_asks),
            no_bids: levels(&snapshot.no_bids),
            no_asks: levels(&snapshot.no_asks),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradesQuery {
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::order::{OrderType, Side};

    fn body(json: serde_json::Value) -> CreateOrderRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_market_defaults_when_omitted() {
        let request = body(serde_json::json!({
            "account_id": "alice",
            "side": "YES",
            "order_type": "BUY",
            "price": 60,
            "quantity": 10
        }));

        let (market_id, request) = request.into_parts().unwrap();
        assert_eq!(market_id.as_str(), DEFAULT_MARKET);
        assert_eq!(request.side, Side::YES);
        assert_eq!(request.order_type, OrderType::BUY);
    }

    #[test]
    fn test_unknown_side_is_a_validation_error() {
        let request = body(serde_json::json!({
            "account_id": "alice",
            "market_id": "m",
            "side": "MAYBE",
            "order_type": "BUY",
            "price": 60,
            "quantity": 10
        }));

        assert_eq!(
            request.into_parts().unwrap_err(),
            ValidationError::InvalidSide("MAYBE".to_string())
        );
    }

    #[test]
    fn test_order_response_carries_remaining_quantity() {
        let order = Order::from_request(
            OrderRequest {
                account_id: "alice".to_string(),
                side: Side::NO,
                order_type: OrderType::SELL,
                price: 40,
                quantity: 7,
            },
            MarketId::try_new("m").unwrap(),
            1,
        )
        .unwrap();

        let json = serde_json::to_value(OrderResponse::from(&order)).unwrap();
        assert_eq!(json["remaining_quantity"], 7);
        assert_eq!(json["quantity"], 7);
        assert_eq!(json["side"], "NO");
        assert_eq!(json["status"], "OPEN");
    }
}
