//! User entity - Represents an account that can place orders.
//!
//! Each user has a `username`, unique `email`, `password`, `role`
//! (e.g. `"customer"`, `"admin"`), and a creation timestamp.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the user
    pub username: String,
    /// Email address, unique across all users
    #[sea_orm(unique)]
    pub email: String,
    /// Password as supplied at creation
    pub password: String,
    /// Role label, e.g. `"customer"` or `"admin"`
    pub role: String,
    /// When the user account was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has many orders
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
