//! Database configuration module for the pharmacy API.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. Table creation uses `Schema::create_table_from_entity` to generate
//! SQL from the entity models, so the schema always matches the Rust struct
//! definitions without manual SQL.

use crate::entities::{MedicineType, Order, OrderItem, Product, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Gets the database URL from environment variable or returns the default
/// local `SQLite` path.
pub fn get_database_url() -> Result<String> {
    Ok(std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://pharmacy.sqlite?mode=rwc".to_string()))
}

/// Establishes a connection to the `SQLite` database at the given URL.
///
/// Foreign key enforcement stays off: rows may reference ids that were never
/// created or were deleted, and order deletion leaves line items behind.
/// A single pooled connection is used; `SQLite` serializes writers anyway, and
/// one handle keeps in-memory test databases coherent.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Creates all necessary database tables using `SeaORM`'s schema generation
/// from entity definitions.
///
/// Statements use `IF NOT EXISTS`, so calling this on every startup is safe.
/// Tables are created for users, medicine types, products, orders, and order
/// items.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let user_table = schema.create_table_from_entity(User).if_not_exists().take();
    let medicine_type_table = schema
        .create_table_from_entity(MedicineType)
        .if_not_exists()
        .take();
    let product_table = schema
        .create_table_from_entity(Product)
        .if_not_exists()
        .take();
    let order_table = schema.create_table_from_entity(Order).if_not_exists().take();
    let order_item_table = schema
        .create_table_from_entity(OrderItem)
        .if_not_exists()
        .take();

    db.execute(builder.build(&user_table)).await?;
    db.execute(builder.build(&medicine_type_table)).await?;
    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&order_table)).await?;
    db.execute(builder.build(&order_item_table)).await?;

    Ok(())
}
