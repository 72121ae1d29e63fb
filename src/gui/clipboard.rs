//! Clipboard functionality

use crate::utils::error::ControllerError;
use arboard::Clipboard;
use tracing::warn;

/// Read text from the system clipboard.
///
/// Any failure maps to [`ControllerError::ClipboardUnavailable`]; callers
/// leave the input field as it was.
pub fn get_clipboard_content() -> Result<String, ControllerError> {
    let mut clipboard = Clipboard::new().map_err(|e| {
        warn!("Failed to access clipboard: {}", e);
        ControllerError::ClipboardUnavailable(e.to_string())
    })?;

    clipboard.get_text().map_err(|e| {
        warn!("Failed to read clipboard: {}", e);
        ControllerError::ClipboardUnavailable(e.to_string())
    })
}
