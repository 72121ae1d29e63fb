//! Database CRUD operations

use crate::storage::KeyValueStore;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Row, Sqlite};
use tracing::debug;

/// Database manager
#[derive(Debug, Clone)]
pub struct DatabaseManager {
    pool: Pool<Sqlite>,
}

impl DatabaseManager {
    /// Create new database manager
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Save setting
    pub async fn save_setting(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)")
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;

        debug!("Saved setting: {} ({} bytes)", key, value.len());
        Ok(())
    }

    /// Get setting
    pub async fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get("value")))
    }

    /// Delete setting
    pub async fn delete_setting(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM settings WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!("Deleted setting: {}", key);
        Ok(())
    }

    /// Get all settings
    pub async fn get_all_settings(&self) -> Result<Vec<SettingsRecord>> {
        let rows = sqlx::query("SELECT key, value FROM settings ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        let mut settings = Vec::with_capacity(rows.len());
        for row in rows {
            settings.push(SettingsRecord {
                key: row.get("key"),
                value: row.get("value"),
            });
        }

        Ok(settings)
    }
}

#[async_trait]
impl KeyValueStore for DatabaseManager {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_setting(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.save_setting(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.delete_setting(key).await
    }
}

/// Settings record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsRecord {
    pub key: String,
    pub value: String,
}
