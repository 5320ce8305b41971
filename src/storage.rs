//! File-writer capability used by the fetcher
//!
//! Separates disk writes from the fetch pipeline so it can run against an
//! in-memory writer in tests.

use crate::error::{Result, WallpaperError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Top-level directory holding one folder per run date
pub const WALLPAPERS_DIR: &str = "wallpapers";

/// Minimal async filesystem capability
#[async_trait]
pub trait FileWriter: Send + Sync {
    /// Create `dir` and any missing parents
    async fn create_dir_all(&self, dir: &Path) -> Result<()>;

    /// Write `bytes` to `path`, truncating an existing file
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}

/// [`FileWriter`] backed by `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

#[async_trait]
impl FileWriter for FsWriter {
    async fn create_dir_all(&self, dir: &Path) -> Result<()> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| WallpaperError::file_io_error("create output directory", dir, &e))
    }

    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| WallpaperError::file_io_error("write wallpaper", path, &e))
    }
}

/// File name for the `index`-th photo of an orientation, e.g. `landscape_01.jpg`
#[must_use]
pub fn wallpaper_file_name(orientation: &str, index: usize) -> String {
    format!("{}_{:02}.jpg", orientation, index)
}

/// `<root>/wallpapers/<date>`
#[must_use]
pub fn date_dir(root: &Path, date: &str) -> PathBuf {
    root.join(WALLPAPERS_DIR).join(date)
}
