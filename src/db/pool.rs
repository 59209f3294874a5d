use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Open the Postgres pool shared by every handler.
///
/// Each gateway request issues exactly one short query, so a small pool
/// covers the load; the acquire timeout keeps a dead database from
/// hanging requests indefinitely instead of failing them.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to Postgres...");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .connect(database_url)
        .await?;

    tracing::info!("Postgres pool ready");

    Ok(pool)
}
