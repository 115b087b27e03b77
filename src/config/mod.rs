//! Application configuration loaded from the environment.

/// Database configuration and connection management
pub mod database;

/// Medicine type seeding from config.toml
pub mod seed;

use crate::errors::Result;
use std::path::PathBuf;

/// Runtime configuration for the whole application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SeaORM connection string for the `SQLite` database
    pub database_url: String,
    /// Address the HTTP server binds to, e.g. `127.0.0.1:8080`
    pub bind_address: String,
    /// Directory uploaded prescription files are written to
    pub upload_dir: PathBuf,
}

/// Builds the application configuration from environment variables,
/// falling back to local-development defaults for anything unset.
///
/// Recognized variables: `DATABASE_URL`, `BIND_ADDRESS`, `UPLOAD_DIR`.
pub fn load_app_configuration() -> Result<AppConfig> {
    let database_url = database::get_database_url()?;

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let upload_dir = std::env::var("UPLOAD_DIR")
        .map_or_else(|_| PathBuf::from("uploads"), PathBuf::from);

    Ok(AppConfig {
        database_url,
        bind_address,
        upload_dir,
    })
}
