use crate::handlers::{info, market, order};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(info::root))
        .route("/health", get(info::health))
        .route("/orders", post(order::create_order))
        .route("/orders/{order_id}", get(order::get_order))
        .route("/order-book/{market_id}", get(market::get_order_book))
        .route("/trades/{market_id}", get(market::get_trades))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
