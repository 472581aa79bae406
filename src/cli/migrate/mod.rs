//! Migrate command - applies pending database migrations and exits

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::migrations::PostgresMigrator;

/// Apply all pending migrations
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await?;

    let migrator = PostgresMigrator::new(pool);
    migrator.run().await?;

    let version = migrator.current_version().await?;
    info!("Migrations applied, current version: {:?}", version);

    Ok(())
}
