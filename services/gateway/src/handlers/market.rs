use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use types::ids::MarketId;

use crate::error::AppError;
use crate::models::{OrderBookResponse, TradeResponse, TradesQuery};
use crate::state::AppState;

pub async fn get_order_book(
    State(state): State<AppState>,
    Path(market_id): Path<String>,
) -> Result<Json<OrderBookResponse>, AppError> {
    let market_id = MarketId::try_new(market_id)?;
    let snapshot = state.engine.snapshot(&market_id);

    Ok(Json(OrderBookResponse::from(&snapshot)))
}

pub async fn get_trades(
    State(state): State<AppState>,
    Path(market_id): Path<String>,
    query: Result<Query<TradesQuery>, QueryRejection>,
) -> Result<Json<Vec<TradeResponse>>, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let market_id = MarketId::try_new(market_id)?;
    let limit = state.trade_limits.resolve(query.limit);

    let trades = state
        .engine
        .recent_trades(&market_id, limit)
        .iter()
        .map(TradeResponse::from)
        .collect();

    Ok(Json(trades))
}
