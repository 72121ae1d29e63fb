//! Error handling for Pinloader

use thiserror::Error;

/// Main error type for Pinloader
#[derive(Debug, Error)]
pub enum PinloaderError {
    #[error("Download failed: {0}")]
    DownloadError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Failures surfaced to the user by the UI controller.
///
/// The `Display` text is what ends up on screen, so every variant reads as a
/// sentence a user can act on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("Please enter a valid Pinterest link.")]
    EmptyInput,

    #[error("Cannot reach the server. Make sure the backend service is running.")]
    NetworkUnreachable,

    #[error("Invalid response from the server.")]
    MalformedResponse,

    /// `detail` message returned by the backend with a non-2xx status.
    #[error("{0}")]
    ServerReported(String),

    /// Carries the platform reason for logging; the user only sees the hint.
    #[error("Couldn't read the clipboard. Please paste the link manually.")]
    ClipboardUnavailable(String),

    #[error("An extraction is already in progress.")]
    RequestInFlight,
}
