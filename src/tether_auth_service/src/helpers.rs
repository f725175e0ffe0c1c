use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connects to PostgreSQL and runs all pending migrations.
pub async fn configure_postgresql(url: &Secret<String>) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(url.expose_secret()).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}
