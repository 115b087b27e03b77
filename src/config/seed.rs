//! Medicine type seeding from config.toml
//!
//! An optional `config.toml` next to the binary can list medicine types to
//! seed into an empty catalogue on first run. Types already present (matched
//! by `type_name`) are left untouched, so the file can stay in place across
//! restarts.

use crate::entities::{MedicineType, medicine_type};
use crate::errors::{Error, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// List of medicine types to seed
    #[serde(default)]
    pub medicine_types: Vec<MedicineTypeSeed>,
}

/// Seed entry for a single medicine type
#[derive(Debug, Deserialize, Clone)]
pub struct MedicineTypeSeed {
    /// Name of the category
    pub type_name: String,
    /// Free-text description
    pub description: String,
}

/// Loads the seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_seed_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Inserts every seed entry whose `type_name` is not already in the database.
pub async fn seed_medicine_types(
    db: &DatabaseConnection,
    config: &SeedConfig,
) -> Result<()> {
    for seed in &config.medicine_types {
        let existing = MedicineType::find()
            .filter(medicine_type::Column::TypeName.eq(seed.type_name.as_str()))
            .one(db)
            .await?;

        if existing.is_none() {
            let model = medicine_type::ActiveModel {
                type_name: Set(seed.type_name.clone()),
                description: Set(seed.description.clone()),
                ..Default::default()
            };
            model.insert(db).await?;
            tracing::info!(type_name = %seed.type_name, "seeded medicine type");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    fn sample_config() -> SeedConfig {
        toml::from_str(
            r#"
            [[medicine_types]]
            type_name = "Antibiotic"
            description = "Treats bacterial infections"

            [[medicine_types]]
            type_name = "Painkiller"
            description = "Pain relief"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_empty_config() {
        let config: SeedConfig = toml::from_str("").unwrap();
        assert!(config.medicine_types.is_empty());
    }

    #[tokio::test]
    async fn test_seed_inserts_missing_types() -> Result<()> {
        let db = setup_test_db().await?;

        seed_medicine_types(&db, &sample_config()).await?;

        let all = MedicineType::find().all(&db).await?;
        assert_eq!(all.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let config = sample_config();

        seed_medicine_types(&db, &config).await?;
        seed_medicine_types(&db, &config).await?;

        let all = MedicineType::find().all(&db).await?;
        assert_eq!(all.len(), 2);
        Ok(())
    }
}
