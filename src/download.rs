//! Media file downloads

use std::path::Path;

use reqwest::{Client, Response, Url};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::time::Duration;

use crate::error::DownloadError;

/// Per-file download timeout
pub const MEDIA_TIMEOUT: Duration = Duration::from_secs(15);

/// Downloads media files to disk, one at a time
#[derive(Debug, Clone)]
pub struct MediaDownloader {
    client: Client,
    timeout: Duration,
}

impl Default for MediaDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaDownloader {
    /// Downloader with the standard 15 second timeout
    pub fn new() -> Self {
        Self::with_timeout(MEDIA_TIMEOUT)
    }

    /// Downloader with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(concat!("lemmydl/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self { client, timeout }
    }

    /// Download `url` into `dest`, returning the number of bytes written.
    ///
    /// On failure no file is left behind at `dest`.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<u64, DownloadError> {
        let target = with_scheme(url);
        tracing::debug!(url = %target, dest = %dest.display(), "downloading media");

        let response = self
            .client
            .get(&*target)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| DownloadError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut file = File::create(dest).await.map_err(|source| DownloadError::Io {
            path: dest.to_path_buf(),
            source,
        })?;

        match write_body(url, response, &mut file, dest).await {
            Ok(written) => Ok(written),
            Err(err) => {
                drop(file);
                if let Err(e) = tokio::fs::remove_file(dest).await {
                    tracing::warn!("Failed to remove partial file {}: {e}", dest.display());
                }
                Err(err)
            }
        }
    }
}

async fn write_body(
    url: &str,
    mut response: Response,
    file: &mut File,
    dest: &Path,
) -> Result<u64, DownloadError> {
    let io_error = |source| DownloadError::Io {
        path: dest.to_path_buf(),
        source,
    };

    let mut written = 0u64;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| DownloadError::from_reqwest(url, e))?
    {
        file.write_all(&chunk).await.map_err(io_error)?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(io_error)?;

    Ok(written)
}

/// `www.` links found in post bodies have no scheme; assume https.
fn with_scheme(url: &str) -> std::borrow::Cow<'_, str> {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.into()
    } else {
        format!("https://{url}").into()
    }
}

/// File name for a media URL: its last non-empty path segment.
///
/// Returns `None` when the URL has no usable segment (bare host, `..`).
pub fn media_file_name(url: &str) -> Option<String> {
    let parsed = Url::parse(&with_scheme(url)).ok()?;
    let segment = parsed
        .path_segments()?
        .rev()
        .find(|segment| !segment.is_empty())?;

    match segment {
        "." | ".." => None,
        name => Some(name.to_string()),
    }
}
