use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::error::{AppError, Result};
use crate::infrastructure::http_client::HttpClient;
use crate::infrastructure::storage::ensure_parent_dir;

/// Downloads image bytes and stores them verbatim
pub struct ImageFetcher {
    http: Arc<dyn HttpClient>,
}

impl ImageFetcher {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Fetch `url` into `destination`.
    ///
    /// Returns `Ok(false)` without touching the network when the destination
    /// already exists, `Ok(true)` once newly fetched bytes have been written.
    pub async fn fetch_and_save(&self, url: &str, destination: &Path) -> Result<bool> {
        if destination.exists() {
            tracing::info!(
                "File {} already exists. Skipping download.",
                destination.display()
            );
            return Ok(false);
        }

        ensure_parent_dir(destination)?;

        let bytes = self.http.get_bytes(url).await?;

        write_then_rename(destination, &bytes).await.map_err(|e| {
            AppError::FilesystemError(format!(
                "Failed to write {}: {}",
                destination.display(),
                e
            ))
        })?;

        tracing::debug!(bytes = bytes.len(), path = %destination.display(), "Saved image");
        Ok(true)
    }
}

/// Sibling the body is staged in; never matches a dataset filename
fn partial_path(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    destination.with_file_name(format!(".{}.part", name))
}

/// The destination only ever appears complete; a failed write leaves nothing behind
async fn write_then_rename(destination: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let partial = partial_path(destination);

    let result = match tokio::fs::write(&partial, bytes).await {
        Ok(()) => tokio::fs::rename(&partial, destination).await,
        Err(err) => Err(err),
    };
    if result.is_err() {
        tokio::fs::remove_file(&partial).await.ok();
    }
    result
}
