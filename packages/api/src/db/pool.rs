//! Database connection pool using the OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::settings::Settings;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Get or initialize the database connection pool.
pub async fn get_pool() -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        dotenvy::dotenv().ok();

        let settings = Settings::new()
            .map_err(|e| sqlx::Error::Configuration(Box::new(e)))?;

        PgPoolOptions::new()
            .max_connections(5)
            .connect(&settings.database.url())
            .await
    })
    .await
}
