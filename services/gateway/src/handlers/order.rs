use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use types::ids::OrderId;

use crate::error::AppError;
use crate::models::{CreateOrderRequest, OrderResponse, SubmitOrderResponse};
use crate::state::AppState;

pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<SubmitOrderResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let (market_id, request) = payload.into_parts()?;

    let submission = state.engine.submit(&market_id, request)?;

    tracing::info!(
        market = %market_id,
        order_id = %submission.order.order_id,
        status = ?submission.order.status,
        trades = submission.trades.len(),
        "order submitted"
    );

    Ok(Json(SubmitOrderResponse::from(&submission)))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderResponse>, AppError> {
    let not_found = || AppError::NotFound(format!("Order {order_id} not found"));

    let id: OrderId = order_id.parse().map_err(|_| not_found())?;
    let order = state.engine.lookup_order(&id).ok_or_else(not_found)?;

    Ok(Json(OrderResponse::from(&order)))
}
