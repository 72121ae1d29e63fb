//! Typed view models for a rendered extraction result

use crate::api::base::{download_filename, ApiBase};
use crate::api::models::{ExtractionResult, MediaType};
use crate::utils::error::PinloaderError;

/// Media preview of a result. Exactly one kind is ever shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaPreview {
    Video {
        src: String,
        poster: String,
        autoplay: bool,
        looped: bool,
        muted: bool,
        controls: bool,
    },
    Image {
        src: String,
        alt: String,
    },
}

impl MediaPreview {
    pub fn is_video(&self) -> bool {
        matches!(self, MediaPreview::Video { .. })
    }

    /// URL of the still frame to load for the preview
    pub fn still_url(&self) -> &str {
        match self {
            MediaPreview::Video { poster, .. } => poster,
            MediaPreview::Image { src, .. } => src,
        }
    }
}

/// One actionable download button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadAction {
    pub href: String,
    pub ext_badge: String,
    pub quality_label: String,
    /// Name the file is saved under, before sanitizing
    pub filename: String,
}

/// Everything the result panel renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub title: String,
    pub preview: MediaPreview,
    pub actions: Vec<DownloadAction>,
}

/// Build the result panel for `data`.
///
/// `referer` is the pin URL the user submitted; when given, every download
/// href forwards it so the media host accepts the proxied request.
pub fn show_result(
    base: &ApiBase,
    data: &ExtractionResult,
    referer: Option<&str>,
) -> Result<ResultView, PinloaderError> {
    let title = data.display_title().to_string();

    let preview = match data.media_type {
        MediaType::Video => MediaPreview::Video {
            src: data
                .links
                .first()
                .map(|l| l.url.clone())
                .unwrap_or_else(|| data.thumbnail.clone()),
            poster: data.thumbnail.clone(),
            autoplay: true,
            looped: true,
            muted: true,
            controls: true,
        },
        MediaType::Image => MediaPreview::Image {
            src: data.thumbnail.clone(),
            alt: title.clone(),
        },
    };

    let actions = data
        .links
        .iter()
        .map(|link| {
            Ok(DownloadAction {
                href: base.download_href(link, &data.title, referer)?,
                ext_badge: link.ext.to_uppercase(),
                quality_label: link.quality_label().to_string(),
                filename: download_filename(&data.title, &link.ext),
            })
        })
        .collect::<Result<Vec<_>, PinloaderError>>()?;

    Ok(ResultView {
        title,
        preview,
        actions,
    })
}
