//! Binary entry point: configuration, database setup, and the HTTP server.

use pharmacy_api::config::{self, database, seed};
use pharmacy_api::errors::Result;
use pharmacy_api::web::{AppState, router};

use dotenvy::dotenv;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;
    info!(
        bind_address = %app_config.bind_address,
        database_url = %app_config.database_url,
        "Loaded application configuration."
    );

    // 4. Initialize database
    let db = database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db)
        .await
        .inspect(|()| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;

    // 5. Seed catalogue categories when a config.toml is present
    if Path::new("config.toml").exists() {
        let seed_config = seed::load_seed_config("config.toml")?;
        seed::seed_medicine_types(&db, &seed_config)
            .await
            .inspect(|()| info!("Medicine types seeded."))
            .inspect_err(|e| error!("Failed to seed medicine types: {e}"))?;
    }

    // 6. Make sure the upload directory exists before the first upload
    tokio::fs::create_dir_all(&app_config.upload_dir).await?;

    // 7. Serve the API
    let app = router(AppState::new(db, app_config.upload_dir.clone()));
    let listener = tokio::net::TcpListener::bind(&app_config.bind_address).await?;
    info!(address = %app_config.bind_address, "Pharmacy API listening.");

    axum::serve(listener, app).await?;

    Ok(())
}
