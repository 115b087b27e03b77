//! Product entity - Represents a medicine available for purchase.
//!
//! Each product belongs to one medicine type, carries a current price and
//! stock count, and may require a prescription. The price stored here is the
//! *current* catalogue price; order line items capture their own copy at
//! order time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the medicine (e.g. "Ibuprofen 400mg")
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Current catalogue price per unit in dollars
    pub price: f64,
    /// ID of the medicine type this product belongs to
    pub medicine_type_id: i64,
    /// Units currently in stock
    pub stock: i32,
    /// Optional URL of a product image
    pub image_url: Option<String>,
    /// Whether a prescription must be uploaded to buy this product
    pub requires_prescription: bool,
    /// ID of the user who added the product
    pub created_by: i64,
    /// When the product was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one medicine type
    #[sea_orm(
        belongs_to = "super::medicine_type::Entity",
        from = "Column::MedicineTypeId",
        to = "super::medicine_type::Column::Id"
    )]
    MedicineType,
    /// One product appears in many order line items
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::medicine_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MedicineType.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
