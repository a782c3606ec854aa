//! Trade execution logic
//!
//! Builds trade records for a match: execution at the maker's price,
//! buyer/seller resolution, per-market sequence numbers and strictly
//! increasing trade timestamps.

use types::clock;
use types::ids::MarketId;
use types::numeric::Quantity;
use types::order::Order;
use types::trade::Trade;

/// Match executor for handling trade generation
#[derive(Debug, Clone)]
pub struct TradeExecutor {
    sequence_counter: u64,
    last_timestamp: i64,
}

impl TradeExecutor {
    /// Create a new match executor with starting sequence number
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence_counter: starting_sequence,
            last_timestamp: i64::MIN,
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Next trade timestamp, never at or before the previous one
    fn next_timestamp(&mut self, now: i64) -> i64 {
        let timestamp = now.max(self.last_timestamp.saturating_add(1));
        self.last_timestamp = timestamp;
        timestamp
    }

    /// Execute a trade between the incoming (taker) and resting (maker) order
    pub fn execute_trade(
        &mut self,
        market_id: &MarketId,
        taker: &Order,
        maker: &Order,
        quantity: Quantity,
    ) -> Trade {
        self.execute_trade_at(market_id, taker, maker, quantity, clock::unix_nanos())
    }

    /// Execute a trade with an explicit wall-clock reading
    pub fn execute_trade_at(
        &mut self,
        market_id: &MarketId,
        taker: &Order,
        maker: &Order,
        quantity: Quantity,
        now: i64,
    ) -> Trade {
        let (buyer, seller) = if taker.is_buy() {
            (taker, maker)
        } else {
            (maker, taker)
        };

        let sequence = self.next_sequence();
        let timestamp = self.next_timestamp(now);

        Trade::new(
            sequence,
            market_id.clone(),
            buyer.account_id.clone(),
            seller.account_id.clone(),
            maker.order_id,
            taker.order_id,
            taker.order_type,
            maker.side,
            maker.price,
            quantity,
            timestamp,
        )
    }
}

impl Default for TradeExecutor {
    fn default() -> Self {
        Self::new(1)
    }
}
