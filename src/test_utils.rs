//! Shared test utilities for the pharmacy API.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{medicine_type, product, user},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::create_connection("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user with sensible defaults.
///
/// # Defaults
/// * `email`: `"<username>@example.com"`
/// * `password`: `"secret"`
/// * `role`: `"customer"`
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entities::user::Model> {
    user::create_user(
        db,
        username.to_string(),
        format!("{username}@example.com"),
        "secret".to_string(),
        "customer".to_string(),
    )
    .await
}

/// Creates a test medicine type with a default description.
pub async fn create_test_medicine_type(
    db: &DatabaseConnection,
    type_name: &str,
) -> Result<entities::medicine_type::Model> {
    medicine_type::create_medicine_type(db, type_name.to_string(), "Test category".to_string())
        .await
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `price`: 10.0
/// * `stock`: 100
/// * `requires_prescription`: false
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    medicine_type_id: i64,
    created_by: i64,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        product::NewProduct {
            name: name.to_string(),
            description: "Test product".to_string(),
            price: 10.0,
            medicine_type_id,
            stock: 100,
            image_url: None,
            requires_prescription: false,
            created_by,
        },
    )
    .await
}

/// Sets up a database with one user and one medicine type.
/// Returns (db, user, `medicine_type`) for catalogue-related tests.
pub async fn setup_with_catalogue() -> Result<(
    DatabaseConnection,
    entities::user::Model,
    entities::medicine_type::Model,
)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "test_user").await?;
    let medicine_type = create_test_medicine_type(&db, "Test Type").await?;
    Ok((db, user, medicine_type))
}
