//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::media_file_name;

/// Resolve the local destination path for a media URL.
pub fn media_destination(dest_dir: &Path, media_url: &str) -> Result<PathBuf> {
    let file_name = media_file_name(media_url)?;
    Ok(dest_dir.join(file_name))
}

/// Ensure a directory exists, creating it and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
