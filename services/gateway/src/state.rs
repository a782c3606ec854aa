use std::sync::Arc;

use matching_engine::MatchingEngine;

use crate::config::TradeLimits;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MatchingEngine>,
    pub trade_limits: TradeLimits,
}

impl AppState {
    pub fn new(engine: Arc<MatchingEngine>, trade_limits: TradeLimits) -> Self {
        Self {
            engine,
            trade_limits,
        }
    }
}
