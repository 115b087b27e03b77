//! Medicine type entity - Represents a product category.
//!
//! Types are flat labels ("Antibiotic", "Painkiller") with a free-text
//! description; each product references exactly one type.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Medicine type database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "medicine_types")]
pub struct Model {
    /// Unique identifier for the medicine type
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the category (e.g. "Antibiotic")
    pub type_name: String,
    /// Free-text description of the category
    pub description: String,
}

/// Defines relationships between MedicineType and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One medicine type has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
