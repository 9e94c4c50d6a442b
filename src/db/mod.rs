use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Shared connection pool against the dashboard database
pub type DbPool = PgPool;

/// Builds the connection pool. Every connection is pinned to UTC so the
/// monthly usage window and the `created_at` comparisons it bounds read
/// from one clock.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(Some(config.idle_timeout))
        .max_lifetime(Some(config.max_lifetime))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("SET timezone = 'UTC'").execute(conn).await?;
                Ok(())
            })
        });

    log::info!(
        "Opening database pool ({}..{} connections)",
        config.min_connections,
        config.max_connections
    );

    let pool = options.connect(&config.url).await?;

    log::info!("Database pool ready");

    Ok(pool)
}

/// Applies pending migrations embedded from ./migrations
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    log::info!("Applying database migrations...");

    sqlx::migrate!("./migrations").run(pool).await?;

    log::info!("Database schema is up to date");
    Ok(())
}

/// Cheap round-trip used by the readiness probe
pub async fn ping(pool: &DbPool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}
