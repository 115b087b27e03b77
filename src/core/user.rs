//! User business logic - Handles all user account operations.
//!
//! This module provides functions for creating, retrieving, updating, and
//! deleting user accounts. Updates go through [`UserUpdate`], an explicit
//! allow-list of mutable columns: the id and creation timestamp can never be
//! overwritten by client input.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Allow-listed mutable fields for a user update.
///
/// Absent fields are left unchanged. Unknown fields are rejected at
/// deserialization, so a payload trying to set `id` or `created_at` fails
/// instead of being silently applied.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserUpdate {
    /// New display name
    pub username: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New password
    pub password: Option<String>,
    /// New role label
    pub role: Option<String>,
}

/// Creates a new user account.
///
/// # Errors
/// Returns an error if the username or email is empty or whitespace-only,
/// or if the database insert fails (e.g. duplicate email).
pub async fn create_user(
    db: &DatabaseConnection,
    username: String,
    email: String,
    password: String,
    role: String,
) -> Result<user::Model> {
    if username.trim().is_empty() {
        return Err(Error::Config {
            message: "Username cannot be empty".to_string(),
        });
    }
    if email.trim().is_empty() {
        return Err(Error::Config {
            message: "Email cannot be empty".to_string(),
        });
    }

    let user = user::ActiveModel {
        username: Set(username.trim().to_string()),
        email: Set(email.trim().to_string()),
        password: Set(password),
        role: Set(role),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    user.insert(db).await.map_err(Into::into)
}

/// Retrieves all users, ordered by id.
pub async fn get_all_users(db: &DatabaseConnection) -> Result<Vec<user::Model>> {
    User::find()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific user by id, returning None if not found.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Applies an allow-listed update to an existing user.
///
/// # Errors
/// Returns [`Error::NotFound`] if the user does not exist.
pub async fn update_user(
    db: &DatabaseConnection,
    user_id: i64,
    changes: UserUpdate,
) -> Result<user::Model> {
    let mut user: user::ActiveModel = User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "User",
            id: user_id,
        })?
        .into();

    if let Some(username) = changes.username {
        user.username = Set(username);
    }
    if let Some(email) = changes.email {
        user.email = Set(email);
    }
    if let Some(password) = changes.password {
        user.password = Set(password);
    }
    if let Some(role) = changes.role {
        user.role = Set(role);
    }

    user.update(db).await.map_err(Into::into)
}

/// Deletes a user by id.
///
/// # Errors
/// Returns [`Error::NotFound`] if the user does not exist. The user's orders
/// are not touched.
pub async fn delete_user(db: &DatabaseConnection, user_id: i64) -> Result<()> {
    let user = User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "User",
            id: user_id,
        })?;

    user.delete(db).await?;
    Ok(())
}
