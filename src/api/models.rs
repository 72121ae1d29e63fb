//! Wire types of the extraction backend

use serde::{Deserialize, Deserializer, Serialize};

/// Title shown when the backend returns none
pub const DEFAULT_TITLE: &str = "Pinterest Pin";

/// Body of `POST /extract`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub url: String,
}

/// Successful `POST /extract` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "media_type_or_image")]
    pub media_type: MediaType,
    #[serde(default)]
    pub links: Vec<DownloadLink>,
}

impl ExtractionResult {
    /// Title for display, falling back to [`DEFAULT_TITLE`]
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }
}

/// Kind of media behind a pin. Anything the backend does not call a video is
/// rendered as an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    #[default]
    #[serde(other)]
    Image,
}

/// `null` is read the same as a missing field
fn media_type_or_image<'de, D>(deserializer: D) -> Result<MediaType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<MediaType>::deserialize(deserializer)?.unwrap_or_default())
}

/// One downloadable rendition of the media
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub url: String,
    pub ext: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DownloadLink {
    /// Quality tier for display: `quality`, then `label`, then "Standard"
    pub fn quality_label(&self) -> &str {
        self.quality
            .as_deref()
            .or(self.label.as_deref())
            .filter(|q| !q.trim().is_empty())
            .unwrap_or("Standard")
    }
}

/// Error body returned with a non-2xx status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human readable `detail`. Validation errors arrive as structured JSON
    /// rather than a string and are rendered compactly.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
