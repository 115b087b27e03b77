//! User CRUD handlers.

use crate::core::user::{self, UserUpdate};
use crate::entities::user::Model as UserModel;
use crate::errors::Result;
use crate::web::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

/// Fields required to create a user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Display name
    pub username: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Role label
    pub role: String,
}

/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    user::create_user(&state.db, body.username, body.email, body.password, body.role).await?;
    Ok((StatusCode::CREATED, Json(json!({"message": "User created"}))))
}

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserModel>>> {
    Ok(Json(user::get_all_users(&state.db).await?))
}

/// `PUT /users/:user_id`
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(changes): Json<UserUpdate>,
) -> Result<Json<Value>> {
    user::update_user(&state.db, user_id, changes).await?;
    Ok(Json(json!({"message": "User updated"})))
}

/// `DELETE /users/:user_id`
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Value>> {
    user::delete_user(&state.db, user_id).await?;
    Ok(Json(json!({"message": "User deleted"})))
}
