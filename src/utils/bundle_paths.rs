//! Platform path resolution
//!
//! Paths are resolved from the platform conventions rather than the current
//! working directory, which is `/` when the app is started from a desktop
//! launcher.
//!
//! - Application data: `<data dir>/Pinloader/`
//! - Downloads: the user's Downloads folder, never a relative `./downloads`

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Get the application data directory, creating it if needed.
pub fn get_app_support_dir() -> PathBuf {
    let dir = dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .unwrap_or_else(std::env::temp_dir)
        .join("Pinloader");

    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!("Failed to create app data directory {:?}: {}", dir, e);
    }

    debug!("App data directory: {:?}", dir);
    dir
}

/// Get the database path.
pub fn get_database_path() -> PathBuf {
    get_app_support_dir().join("pinloader.db")
}

/// Get the downloads directory.
pub fn get_downloads_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| {
            warn!("Could not determine Downloads directory, using temp dir");
            std::env::temp_dir()
        })
}

/// First path in `dir` named `filename` that neither exists yet nor is in
/// `reserved` (destinations of downloads still being written).
///
/// `photo.jpg` becomes `photo (1).jpg`, `photo (2).jpg`, ... when taken.
pub fn unique_destination(dir: &Path, filename: &str, reserved: &[&Path]) -> PathBuf {
    let is_free = |p: &Path| !p.exists() && !reserved.iter().any(|r| *r == p);

    let candidate = dir.join(filename);
    if is_free(candidate.as_path()) {
        return candidate;
    }

    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());

    (1..)
        .map(|n| match &ext {
            Some(ext) => dir.join(format!("{} ({}).{}", stem, n, ext)),
            None => dir.join(format!("{} ({})", stem, n)),
        })
        .find(|p| is_free(p.as_path()))
        .unwrap_or(candidate)
}
