//! Database schema

use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Pool, Sqlite};
use tracing::{debug, info};

/// Initialize the database
pub async fn initialize_database(db_path: &str) -> Result<Pool<Sqlite>> {
    // Create database if it doesn't exist
    if !Sqlite::database_exists(db_path).await? {
        debug!("Creating database at: {}", db_path);
        Sqlite::create_database(db_path).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(4)
        .connect(db_path)
        .await?;

    info!("Running database migrations");
    create_tables(&pool).await?;

    Ok(pool)
}

/// Create database tables
async fn create_tables(pool: &Pool<Sqlite>) -> Result<()> {
    // Preferences, settings and the serialized history all live here
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    debug!("Database tables created successfully");
    Ok(())
}
