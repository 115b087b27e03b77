//! Medicine type business logic - Handles catalogue category operations.
//!
//! Plain CRUD over the `medicine_types` table. Updates go through
//! [`MedicineTypeUpdate`], the allow-list of mutable columns.

use crate::{
    entities::{MedicineType, medicine_type},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Allow-listed mutable fields for a medicine type update.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MedicineTypeUpdate {
    /// New category name
    pub type_name: Option<String>,
    /// New description
    pub description: Option<String>,
}

/// Creates a new medicine type.
///
/// # Errors
/// Returns an error if the type name is empty or whitespace-only.
pub async fn create_medicine_type(
    db: &DatabaseConnection,
    type_name: String,
    description: String,
) -> Result<medicine_type::Model> {
    if type_name.trim().is_empty() {
        return Err(Error::Config {
            message: "Type name cannot be empty".to_string(),
        });
    }

    let medicine_type = medicine_type::ActiveModel {
        type_name: Set(type_name.trim().to_string()),
        description: Set(description),
        ..Default::default()
    };
    medicine_type.insert(db).await.map_err(Into::into)
}

/// Retrieves all medicine types, ordered by name.
pub async fn get_all_medicine_types(
    db: &DatabaseConnection,
) -> Result<Vec<medicine_type::Model>> {
    MedicineType::find()
        .order_by_asc(medicine_type::Column::TypeName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific medicine type by id, returning None if not found.
pub async fn get_medicine_type_by_id(
    db: &DatabaseConnection,
    type_id: i64,
) -> Result<Option<medicine_type::Model>> {
    MedicineType::find_by_id(type_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Applies an allow-listed update to an existing medicine type.
///
/// # Errors
/// Returns [`Error::NotFound`] if the type does not exist.
pub async fn update_medicine_type(
    db: &DatabaseConnection,
    type_id: i64,
    changes: MedicineTypeUpdate,
) -> Result<medicine_type::Model> {
    let mut medicine_type: medicine_type::ActiveModel = MedicineType::find_by_id(type_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "MedicineType",
            id: type_id,
        })?
        .into();

    if let Some(type_name) = changes.type_name {
        medicine_type.type_name = Set(type_name);
    }
    if let Some(description) = changes.description {
        medicine_type.description = Set(description);
    }

    medicine_type.update(db).await.map_err(Into::into)
}

/// Deletes a medicine type by id.
///
/// # Errors
/// Returns [`Error::NotFound`] if the type does not exist. Products that
/// reference it are not touched.
pub async fn delete_medicine_type(db: &DatabaseConnection, type_id: i64) -> Result<()> {
    let medicine_type = MedicineType::find_by_id(type_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "MedicineType",
            id: type_id,
        })?;

    medicine_type.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_medicine_type, setup_test_db};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_medicine_type_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_medicine_type(&db, "  ".to_string(), "desc".to_string()).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_and_list_types() -> Result<()> {
        let db = setup_test_db().await?;

        let painkiller = create_test_medicine_type(&db, "Painkiller").await?;
        let antibiotic = create_test_medicine_type(&db, "Antibiotic").await?;

        // Ordered by name, not insertion
        let types = get_all_medicine_types(&db).await?;
        assert_eq!(types, vec![antibiotic, painkiller]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_medicine_type() -> Result<()> {
        let db = setup_test_db().await?;
        let mtype = create_test_medicine_type(&db, "Painkiller").await?;

        let updated = update_medicine_type(
            &db,
            mtype.id,
            MedicineTypeUpdate {
                description: Some("Over-the-counter pain relief".to_string()),
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(updated.type_name, "Painkiller");
        assert_eq!(updated.description, "Over-the-counter pain relief");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_medicine_type_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = delete_medicine_type(&db, 999).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "MedicineType",
                id: 999
            }
        ));

        Ok(())
    }
}
