use axum::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Prediction Market Matching Engine API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /orders": "Submit an order",
            "GET /orders/{order_id}": "Look up an order by id",
            "GET /order-book/{market_id}": "Aggregated order book snapshot",
            "GET /trades/{market_id}": "Recent trades, oldest first",
            "GET /health": "Health check"
        }
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
