//! Order intake and order CRUD handlers.

use crate::core::order::{self, NewOrderItem, OrderUpdate};
use crate::entities::order::Model as OrderModel;
use crate::errors::Result;
use crate::web::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

/// Order placement payload: header fields plus the requested line items.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    /// User placing the order
    pub user_id: i64,
    /// Total amount as computed by the client
    pub total_amount: f64,
    /// Optional reference to an already-uploaded prescription file
    #[serde(default)]
    pub prescription_file: Option<String>,
    /// Requested line items; may be empty
    pub items: Vec<NewOrderItem>,
}

/// `POST /orders` - the order intake endpoint.
///
/// Persists the order header, then its line items, and returns the generated
/// order identifier.
pub async fn place_order(
    State(state): State<AppState>,
    Json(body): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    let order = order::place_order(
        &state.db,
        body.user_id,
        body.total_amount,
        body.prescription_file,
        body.items,
    )
    .await?;

    tracing::info!(order_id = order.id, user_id = order.user_id, "order placed");
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Order placed", "order_id": order.id})),
    ))
}

/// `GET /orders`
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<OrderModel>>> {
    Ok(Json(order::get_all_orders(&state.db).await?))
}

/// `PUT /orders/:order_id`
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    Json(changes): Json<OrderUpdate>,
) -> Result<Json<Value>> {
    order::update_order(&state.db, order_id, changes).await?;
    Ok(Json(json!({"message": "Order updated"})))
}

/// `DELETE /orders/:order_id`
pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Json<Value>> {
    order::delete_order(&state.db, order_id).await?;
    Ok(Json(json!({"message": "Order deleted"})))
}
