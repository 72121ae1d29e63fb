//! Utility modules for error handling, paths and configuration

pub mod bundle_paths;
pub mod config;
pub mod error;
pub mod filename;

// Re-export for convenience
pub use bundle_paths::{get_app_support_dir, get_database_path, get_downloads_dir, unique_destination};
pub use config::AppSettings;
pub use error::{ControllerError, PinloaderError};
pub use filename::sanitize_filename;
