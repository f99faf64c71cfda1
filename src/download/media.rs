//! Media file downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::TwitterApi;
use crate::error::{Error, Result};
use crate::fs;
use crate::output::progress::create_download_bar;

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Download a single media URL into the destination directory.
///
/// The local file is named after the URL's last path segment.
pub async fn download_media_file(
    api: &TwitterApi,
    media_url: &str,
    dest_dir: &Path,
    show_progress: bool,
) -> Result<PathBuf> {
    let output_path = fs::media_destination(dest_dir, media_url)?;

    let response = api.fetch_media(media_url).await?;

    let content_length = response.content_length();
    let show_bar = show_progress
        && content_length
            .map(|l| l > PROGRESS_THRESHOLD)
            .unwrap_or(false);

    let progress = show_bar.then(|| create_download_bar(content_length.unwrap_or(0)));

    // Stream to file
    let mut file = File::create(&output_path).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    tracing::debug!("Downloaded: {}", output_path.display());

    Ok(output_path)
}
