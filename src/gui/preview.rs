//! Loading the still image shown in the result panel

use tracing::{debug, warn};

/// Longest edge of a decoded preview, in pixels
pub const PREVIEW_MAX_EDGE: u32 = 480;

/// Decoded RGBA pixels ready for an iced image handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl PreviewImage {
    pub fn handle(&self) -> iced::widget::image::Handle {
        iced::widget::image::Handle::from_pixels(self.width, self.height, self.rgba.clone())
    }
}

/// Fetch `url` and decode it into a preview
pub async fn fetch_preview(client: reqwest::Client, url: String) -> Result<PreviewImage, String> {
    debug!("Fetching preview {}", url);

    let bytes = client
        .get(&url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| {
            warn!("Preview request for {} failed: {}", url, e);
            e.to_string()
        })?
        .bytes()
        .await
        .map_err(|e| e.to_string())?;

    decode_preview(&bytes)
}

/// Decode image bytes, scaling down to [`PREVIEW_MAX_EDGE`]
pub fn decode_preview(bytes: &[u8]) -> Result<PreviewImage, String> {
    let img = image::load_from_memory(bytes).map_err(|e| {
        warn!("Preview is not a decodable image: {}", e);
        e.to_string()
    })?;

    let img = if img.width() > PREVIEW_MAX_EDGE || img.height() > PREVIEW_MAX_EDGE {
        img.thumbnail(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(PreviewImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}
