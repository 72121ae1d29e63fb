//! Theme preference

use crate::storage::KeyValueStore;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Persistent key of the theme preference
pub const THEME_KEY: &str = "theme";

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Unknown values fall back to dark
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "light" => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// Glyph for the toggle button
    pub fn icon(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "🌙",
            ThemePreference::Light => "☀️",
        }
    }

    pub async fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        Ok(store
            .get(THEME_KEY)
            .await?
            .map(|v| Self::parse(&v))
            .unwrap_or_default())
    }

    pub async fn save<S: KeyValueStore + ?Sized>(self, store: &S) -> Result<()> {
        store.set(THEME_KEY, self.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled().toggled(), ThemePreference::Light);
    }

    #[tokio::test]
    async fn test_defaults_to_dark_and_persists() {
        let store = MemoryStore::new();
        assert_eq!(ThemePreference::load(&store).await.unwrap(), ThemePreference::Dark);

        ThemePreference::Light.save(&store).await.unwrap();
        assert_eq!(store.get(THEME_KEY).await.unwrap().as_deref(), Some("light"));
        assert_eq!(ThemePreference::load(&store).await.unwrap(), ThemePreference::Light);

        store.set(THEME_KEY, "sepia").await.unwrap();
        assert_eq!(ThemePreference::load(&store).await.unwrap(), ThemePreference::Dark);
    }
}
