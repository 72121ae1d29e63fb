//! Streaming a proxied download to disk

use crate::api::models::ErrorBody;
use crate::utils::error::PinloaderError;
use futures::StreamExt;
use reqwest::Client;
use std::path::Path;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Fetch `href` and write the body to `dest`, returning the byte count.
///
/// Fails without touching an existing file at `dest`. A partially written
/// file is removed when the transfer fails.
pub async fn download_to_file(client: &Client, href: &str, dest: &Path) -> Result<u64, PinloaderError> {
    debug!("Downloading {} -> {:?}", href, dest);

    let response = client.get(href).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        let detail = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message())
            .unwrap_or_else(|| format!("server responded with HTTP {}", status.as_u16()));
        warn!("Download of {} rejected: {}", href, detail);
        return Err(PinloaderError::DownloadError(detail));
    }

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // An existing file at `dest` belongs to someone else; never truncate it
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .await?;

    match write_body(response, file).await {
        Ok(written) => {
            info!("Saved {} bytes to {:?}", written, dest);
            Ok(written)
        }
        Err(e) => {
            if let Err(cleanup) = tokio::fs::remove_file(dest).await {
                debug!("Could not remove partial file {:?}: {}", dest, cleanup);
            }
            Err(e)
        }
    }
}

async fn write_body(response: reqwest::Response, mut file: File) -> Result<u64, PinloaderError> {
    let mut stream = response.bytes_stream();
    let mut written = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;
    Ok(written)
}
