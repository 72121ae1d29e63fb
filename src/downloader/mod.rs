//! Saving download actions to disk

pub mod transfer;

pub use transfer::download_to_file;

use std::path::PathBuf;

/// Lifecycle of one saved file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStatus {
    InProgress,
    Completed { path: PathBuf, bytes: u64 },
    Failed(String),
}

impl DownloadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DownloadStatus::InProgress => "Downloading",
            DownloadStatus::Completed { .. } => "Completed",
            DownloadStatus::Failed(_) => "Failed",
        }
    }
}

/// A download as listed in the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub id: String,
    pub filename: String,
    pub destination: PathBuf,
    pub status: DownloadStatus,
}

impl DownloadTask {
    pub fn new(filename: impl Into<String>, destination: PathBuf) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            filename: filename.into(),
            destination,
            status: DownloadStatus::InProgress,
        }
    }
}
