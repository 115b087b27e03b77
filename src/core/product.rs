//! Product business logic - Handles catalogue product operations.
//!
//! This module provides functions for creating, retrieving, updating, and
//! deleting products. Prices are validated to be finite and non-negative and
//! stock counts non-negative; beyond that nothing cross-checks the referenced
//! medicine type or creator, matching the catalogue's permissive write model.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Allow-listed mutable fields for a product update.
///
/// `created_by`, `created_at`, and the id are deliberately absent.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductUpdate {
    /// New product name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New catalogue price
    pub price: Option<f64>,
    /// New medicine type reference
    pub medicine_type_id: Option<i64>,
    /// New stock count
    pub stock: Option<i32>,
    /// New image URL; `Some(None)` is not distinguishable, absent leaves it alone
    pub image_url: Option<String>,
    /// New prescription requirement flag
    pub requires_prescription: Option<bool>,
}

/// Fields required to create a product.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewProduct {
    /// Product name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Catalogue price per unit
    pub price: f64,
    /// Medicine type reference
    pub medicine_type_id: i64,
    /// Initial stock count
    pub stock: i32,
    /// Optional image URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Whether a prescription is required
    pub requires_prescription: bool,
    /// User who adds the product
    pub created_by: i64,
}

/// Creates a new product, performing input validation.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The price is negative or not finite (NaN, infinity)
/// - The stock count is negative
pub async fn create_product(db: &DatabaseConnection, new: NewProduct) -> Result<product::Model> {
    if new.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }
    if new.price < 0.0 || !new.price.is_finite() {
        return Err(Error::InvalidAmount { amount: new.price });
    }
    if new.stock < 0 {
        return Err(Error::InvalidQuantity {
            quantity: new.stock,
        });
    }

    let product = product::ActiveModel {
        name: Set(new.name.trim().to_string()),
        description: Set(new.description),
        price: Set(new.price),
        medicine_type_id: Set(new.medicine_type_id),
        stock: Set(new.stock),
        image_url: Set(new.image_url),
        requires_prescription: Set(new.requires_prescription),
        created_by: Set(new.created_by),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Retrieves all products, ordered alphabetically by name.
pub async fn get_all_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by id, returning None if not found.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Applies an allow-listed update to an existing product, re-validating
/// price and stock when they change.
///
/// # Errors
/// Returns [`Error::NotFound`] if the product does not exist, or a validation
/// error for a bad price or stock count.
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    changes: ProductUpdate,
) -> Result<product::Model> {
    if let Some(price) = changes.price {
        if price < 0.0 || !price.is_finite() {
            return Err(Error::InvalidAmount { amount: price });
        }
    }
    if let Some(stock) = changes.stock {
        if stock < 0 {
            return Err(Error::InvalidQuantity { quantity: stock });
        }
    }

    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Product",
            id: product_id,
        })?
        .into();

    if let Some(name) = changes.name {
        product.name = Set(name);
    }
    if let Some(description) = changes.description {
        product.description = Set(description);
    }
    if let Some(price) = changes.price {
        product.price = Set(price);
    }
    if let Some(medicine_type_id) = changes.medicine_type_id {
        product.medicine_type_id = Set(medicine_type_id);
    }
    if let Some(stock) = changes.stock {
        product.stock = Set(stock);
    }
    if let Some(image_url) = changes.image_url {
        product.image_url = Set(Some(image_url));
    }
    if let Some(requires_prescription) = changes.requires_prescription {
        product.requires_prescription = Set(requires_prescription);
    }

    product.update(db).await.map_err(Into::into)
}

/// Deletes a product by id.
///
/// # Errors
/// Returns [`Error::NotFound`] if the product does not exist. Order line
/// items that reference it are not touched.
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Product",
            id: product_id,
        })?;

    product.delete(db).await?;
    Ok(())
}
