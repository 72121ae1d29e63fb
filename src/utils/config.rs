//! Application configuration

use crate::storage::KeyValueStore;
use crate::utils::bundle_paths::get_downloads_dir;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const SERVER_URL_KEY: &str = "server_url";
const DOWNLOAD_LOCATION_KEY: &str = "download_location";
const FORWARD_REFERER_KEY: &str = "forward_referer";

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Origin of the deployed backend. `None` targets the local development
    /// backend.
    pub server_url: Option<String>,

    /// Download location
    pub download_location: PathBuf,

    /// Send the submitted pin URL as `referer` with every download
    pub forward_referer: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: None,
            download_location: get_downloads_dir(),
            forward_referer: true,
        }
    }
}

impl AppSettings {
    /// Load settings, keeping defaults for anything not stored
    pub async fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(url) = store.get(SERVER_URL_KEY).await? {
            let url = url.trim();
            if !url.is_empty() {
                settings.server_url = Some(url.to_string());
            }
        }

        if let Some(location) = store.get(DOWNLOAD_LOCATION_KEY).await? {
            if !location.trim().is_empty() {
                settings.download_location = PathBuf::from(location);
            }
        }

        if let Some(value) = store.get(FORWARD_REFERER_KEY).await? {
            if let Ok(val) = value.parse::<bool>() {
                settings.forward_referer = val;
            }
        }

        Ok(settings)
    }

    /// Save settings
    pub async fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<()> {
        match self.server_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => store.set(SERVER_URL_KEY, url).await?,
            _ => store.remove(SERVER_URL_KEY).await?,
        }
        store
            .set(
                DOWNLOAD_LOCATION_KEY,
                &self.download_location.to_string_lossy(),
            )
            .await?;
        store
            .set(FORWARD_REFERER_KEY, &self.forward_referer.to_string())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert!(config.server_url.is_none());
        assert!(config.forward_referer);
        assert!(config.download_location.is_absolute());
    }

    #[tokio::test]
    async fn test_settings_roundtrip_through_store() {
        let store = MemoryStore::new();
        let settings = AppSettings {
            server_url: Some("https://pins.example.com".to_string()),
            download_location: PathBuf::from("/srv/pins"),
            forward_referer: false,
        };
        settings.save(&store).await.unwrap();

        assert_eq!(AppSettings::load(&store).await.unwrap(), settings);
    }

    #[tokio::test]
    async fn test_blank_server_url_is_cleared() {
        let store = MemoryStore::new();
        store.set(SERVER_URL_KEY, "https://old.example.com").await.unwrap();

        let settings = AppSettings {
            server_url: Some("   ".to_string()),
            ..AppSettings::default()
        };
        settings.save(&store).await.unwrap();

        assert_eq!(store.get(SERVER_URL_KEY).await.unwrap(), None);
        assert!(AppSettings::load(&store).await.unwrap().server_url.is_none());
    }

    #[tokio::test]
    async fn test_garbage_values_keep_defaults() {
        let store = MemoryStore::new();
        store.set(FORWARD_REFERER_KEY, "maybe").await.unwrap();
        store.set(DOWNLOAD_LOCATION_KEY, "").await.unwrap();

        assert_eq!(AppSettings::load(&store).await.unwrap(), AppSettings::default());
    }
}
