use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use konfig_core::config::PostgresConfig;

use crate::error::StoreError;

/// Create a PostgreSQL connection pool and run migrations.
pub async fn connect(config: &PostgresConfig) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url())
        .await?;
    info!("PostgreSQL connected: {}", config.host);

    sqlx::migrate!("../../migrations").run(&pool).await?;
    info!("Database migrations applied");

    Ok(pool)
}
