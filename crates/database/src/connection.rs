use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Establishes a connection pool to the SQLite database.
///
/// Foreign keys are switched on for every connection so that the venue → show
/// cascade is enforced. An in-memory URL gets a single, never-recycled
/// connection, otherwise every pooled connection would see its own empty database.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str(&settings.url)
        .map_err(|e| DbError::ConnectionConfigError(e.to_string()))?
        .create_if_missing(settings.create_if_missing)
        .foreign_keys(true);

    let in_memory = settings.url.contains(":memory:");
    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(if in_memory { 1 } else { settings.max_connections })
        .acquire_timeout(settings.acquire_timeout());
    if in_memory {
        pool_options = pool_options.idle_timeout(None).max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;
    tracing::info!(url = %settings.url, "Connected to database.");

    Ok(pool)
}

/// Applies the embedded migrations under `./migrations`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
