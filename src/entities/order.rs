//! Order entity - The order header row.
//!
//! One row per purchase: owning user, creation timestamp, total amount as
//! submitted by the client, a status string ("Pending" on creation), and an
//! optional prescription file reference (empty string when none was given).
//! Line items live in [`super::order_item`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order, assigned on creation
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who placed the order
    pub user_id: i64,
    /// When the order was placed
    pub order_date: DateTimeUtc,
    /// Total amount in dollars, as submitted by the client
    pub total_amount: f64,
    /// Status label; always `"Pending"` at creation, mutated by updates later
    pub status: String,
    /// Stored path of an uploaded prescription, empty string when none
    pub prescription_file: String,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// One order has many line items
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
