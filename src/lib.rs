//! Pinloader library

pub mod api;
pub mod controller;
pub mod database;
pub mod downloader;
pub mod gui;
pub mod history;
pub mod preferences;
pub mod storage;
pub mod utils;

// Re-export main types for easier use
pub use api::{ApiBase, ApiClient, ExtractApi, ExtractionResult, MediaType};
pub use controller::{handle_download, UiController, UiState};
pub use gui::{Message, PinloaderApp, View};
pub use history::HistoryEntry;
pub use preferences::ThemePreference;
pub use storage::{KeyValueStore, MemoryStore};
pub use utils::{AppSettings, ControllerError, PinloaderError};
