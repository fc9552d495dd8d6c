//! DevReviews API - product catalog and reviews over REST

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = match &config.database {
        Some(database) => {
            info!("Connecting to PostgreSQL");
            let db =
                database::postgres::connect_from_config_with_retry(database.clone(), None).await?;
            database::postgres::run_migrations::<Migrator>(&db, config.app.name).await?;
            Some(db)
        }
        None => {
            warn!("DATABASE_URL not set, products and reviews are kept in memory");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        db,
    };

    let router = api::app(&state)?;

    info!(
        version = config.app.version,
        address = %config.server.address(),
        "Starting DevReviews API"
    );

    create_production_app(
        router,
        &config.server,
        Duration::from_secs(30),
        async move {
            if let Some(db) = state.db {
                info!("Shutting down: closing database connections");
                if let Err(e) = db.close().await {
                    warn!(error = %e, "Failed to close database pool");
                }
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("DevReviews API shutdown complete");
    Ok(())
}
