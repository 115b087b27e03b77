//! Product CRUD handlers.

use crate::core::product::{self, NewProduct, ProductUpdate};
use crate::entities::product::Model as ProductModel;
use crate::errors::Result;
use crate::web::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

/// `POST /products`
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<NewProduct>,
) -> Result<(StatusCode, Json<Value>)> {
    product::create_product(&state.db, body).await?;
    Ok((StatusCode::CREATED, Json(json!({"message": "Product added"}))))
}

/// `GET /products`
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductModel>>> {
    Ok(Json(product::get_all_products(&state.db).await?))
}

/// `PUT /products/:product_id`
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(changes): Json<ProductUpdate>,
) -> Result<Json<Value>> {
    product::update_product(&state.db, product_id, changes).await?;
    Ok(Json(json!({"message": "Product updated"})))
}

/// `DELETE /products/:product_id`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<Value>> {
    product::delete_product(&state.db, product_id).await?;
    Ok(Json(json!({"message": "Product deleted"})))
}
