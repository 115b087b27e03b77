//! Order business logic - Order intake and order CRUD.
//!
//! Order intake is the one multi-step write in the system: it inserts the
//! order header, commits to obtain the generated id, then inserts every line
//! item in one batch referencing that id. There is deliberately no check that
//! the user or the products exist, no price cross-check against the catalogue,
//! and no stock decrement; the submitted `price` is captured verbatim on each
//! line item.
//!
//! The two inserts are not wrapped in a transaction: if the item batch fails,
//! the header row survives without its items. Line items are likewise not
//! removed when an order is deleted.

use crate::{
    entities::{Order, OrderItem, order, order_item},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// One requested line item in an order placement.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewOrderItem {
    /// Ordered product reference
    pub product_id: i64,
    /// Number of units, must be positive
    pub quantity: i32,
    /// Unit price in dollars, captured as submitted
    pub price: f64,
}

/// Allow-listed mutable fields for an order update.
///
/// The id, owning user, and order date are fixed at creation time.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderUpdate {
    /// New status label, e.g. `"Shipped"`
    pub status: Option<String>,
    /// Corrected total amount
    pub total_amount: Option<f64>,
    /// New prescription file reference
    pub prescription_file: Option<String>,
}

/// Places an order: one header row plus one line item per entry in `items`.
///
/// The header is created with status `"Pending"` regardless of input and an
/// empty `prescription_file` when none is given. An empty `items` list is
/// legal and yields an order with zero line items. Returns the persisted
/// header; its `id` is the order identifier handed back to the client.
///
/// # Errors
/// Returns a validation error if the total or any item price is negative or
/// not finite, or if any quantity is not positive. Database failures while
/// inserting items leave the already-committed header in place.
pub async fn place_order(
    db: &DatabaseConnection,
    user_id: i64,
    total_amount: f64,
    prescription_file: Option<String>,
    items: Vec<NewOrderItem>,
) -> Result<order::Model> {
    if total_amount < 0.0 || !total_amount.is_finite() {
        return Err(Error::InvalidAmount {
            amount: total_amount,
        });
    }
    for item in &items {
        if item.quantity <= 0 {
            return Err(Error::InvalidQuantity {
                quantity: item.quantity,
            });
        }
        if item.price < 0.0 || !item.price.is_finite() {
            return Err(Error::InvalidAmount { amount: item.price });
        }
    }

    let header = order::ActiveModel {
        user_id: Set(user_id),
        order_date: Set(chrono::Utc::now()),
        total_amount: Set(total_amount),
        status: Set("Pending".to_string()),
        prescription_file: Set(prescription_file.unwrap_or_default()),
        ..Default::default()
    };
    // First commit: assigns the order id the line items reference
    let order = header.insert(db).await?;

    if !items.is_empty() {
        let rows = items.into_iter().map(|item| order_item::ActiveModel {
            order_id: Set(order.id),
            product_id: Set(item.product_id),
            quantity: Set(item.quantity),
            price: Set(item.price),
            ..Default::default()
        });
        OrderItem::insert_many(rows).exec(db).await?;
    }

    Ok(order)
}

/// Retrieves all orders, ordered by id.
pub async fn get_all_orders(db: &DatabaseConnection) -> Result<Vec<order::Model>> {
    Order::find()
        .order_by_asc(order::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific order by id, returning None if not found.
pub async fn get_order_by_id(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Option<order::Model>> {
    Order::find_by_id(order_id).one(db).await.map_err(Into::into)
}

/// Retrieves the line items belonging to an order, ordered by id.
pub async fn get_items_for_order(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Vec<order_item::Model>> {
    OrderItem::find()
        .filter(order_item::Column::OrderId.eq(order_id))
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Applies an allow-listed update to an existing order.
///
/// # Errors
/// Returns [`Error::NotFound`] if the order does not exist, or
/// [`Error::InvalidAmount`] for a bad corrected total.
pub async fn update_order(
    db: &DatabaseConnection,
    order_id: i64,
    changes: OrderUpdate,
) -> Result<order::Model> {
    if let Some(total) = changes.total_amount {
        if total < 0.0 || !total.is_finite() {
            return Err(Error::InvalidAmount { amount: total });
        }
    }

    let mut order: order::ActiveModel = Order::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Order",
            id: order_id,
        })?
        .into();

    if let Some(status) = changes.status {
        order.status = Set(status);
    }
    if let Some(total_amount) = changes.total_amount {
        order.total_amount = Set(total_amount);
    }
    if let Some(prescription_file) = changes.prescription_file {
        order.prescription_file = Set(prescription_file);
    }

    order.update(db).await.map_err(Into::into)
}

/// Deletes an order header by id. Its line items are left in place.
///
/// # Errors
/// Returns [`Error::NotFound`] if the order does not exist.
pub async fn delete_order(db: &DatabaseConnection, order_id: i64) -> Result<()> {
    let order = Order::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Order",
            id: order_id,
        })?;

    order.delete(db).await?;
    Ok(())
}
