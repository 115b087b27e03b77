//! Medicine type CRUD handlers.

use crate::core::medicine_type::{self, MedicineTypeUpdate};
use crate::entities::medicine_type::Model as MedicineTypeModel;
use crate::errors::Result;
use crate::web::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

/// Fields required to create a medicine type.
#[derive(Debug, Deserialize)]
pub struct CreateMedicineTypeRequest {
    /// Category name
    pub type_name: String,
    /// Free-text description
    pub description: String,
}

/// `POST /types`
pub async fn create_medicine_type(
    State(state): State<AppState>,
    Json(body): Json<CreateMedicineTypeRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    medicine_type::create_medicine_type(&state.db, body.type_name, body.description).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Medicine type added"})),
    ))
}

/// `GET /types`
pub async fn list_medicine_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<MedicineTypeModel>>> {
    Ok(Json(medicine_type::get_all_medicine_types(&state.db).await?))
}

/// `PUT /types/:type_id`
pub async fn update_medicine_type(
    State(state): State<AppState>,
    Path(type_id): Path<i64>,
    Json(changes): Json<MedicineTypeUpdate>,
) -> Result<Json<Value>> {
    medicine_type::update_medicine_type(&state.db, type_id, changes).await?;
    Ok(Json(json!({"message": "Medicine type updated"})))
}

/// `DELETE /types/:type_id`
pub async fn delete_medicine_type(
    State(state): State<AppState>,
    Path(type_id): Path<i64>,
) -> Result<Json<Value>> {
    medicine_type::delete_medicine_type(&state.db, type_id).await?;
    Ok(Json(json!({"message": "Medicine type deleted"})))
}
