//! Browse wallpapers saved by earlier runs

use crate::config::Orientation;
use crate::error::{Result, WallpaperError};
use crate::run::DATE_FORMAT;
use crate::storage::WALLPAPERS_DIR;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Wallpapers saved for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub date: NaiveDate,
    pub path: PathBuf,
    /// Desktop file names, sorted
    pub desktop: Vec<String>,
    /// Mobile file names, sorted
    pub mobile: Vec<String>,
}

impl ArchiveEntry {
    #[must_use]
    pub fn total(&self) -> usize {
        self.desktop.len() + self.mobile.len()
    }
}

/// Dates with a folder under `<root>/wallpapers`, newest first
///
/// Folders whose name is not a zero-padded `YYYY-MM-DD` date are ignored.
pub fn list_dates(root: &Path) -> Result<Vec<NaiveDate>> {
    let wallpapers_dir = root.join(WALLPAPERS_DIR);
    let mut dates = Vec::new();

    if !wallpapers_dir.exists() {
        return Ok(dates);
    }

    let entries = fs::read_dir(&wallpapers_dir).map_err(|e| {
        WallpaperError::file_io_error("read wallpapers directory", &wallpapers_dir, &e)
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            WallpaperError::file_io_error("read wallpapers directory entry", &wallpapers_dir, &e)
        })?;

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let parsed = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(parse_folder_date);

        match parsed {
            Some(date) => dates.push(date),
            None => tracing::debug!("Skipping non-date folder: {}", path.display()),
        }
    }

    dates.sort_unstable_by(|a, b| b.cmp(a));
    Ok(dates)
}

/// Parse a run folder name; unpadded forms such as `2025-1-5` are rejected
/// so the date always maps back to the same folder
fn parse_folder_date(name: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(name, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == name).then_some(date)
}

/// Wallpapers saved for `date`
pub fn list_entry(root: &Path, date: NaiveDate) -> Result<ArchiveEntry> {
    let path = root
        .join(WALLPAPERS_DIR)
        .join(date.format(DATE_FORMAT).to_string());

    Ok(ArchiveEntry {
        date,
        desktop: list_images(&path.join(Orientation::Landscape.kind_dir()))?,
        mobile: list_images(&path.join(Orientation::Portrait.kind_dir()))?,
        path,
    })
}

/// `.jpg` file names in `dir`, sorted; a missing directory is empty
fn list_images(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir)
        .map_err(|e| WallpaperError::file_io_error("read wallpaper directory", dir, &e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| WallpaperError::file_io_error("read wallpaper directory entry", dir, &e))?;
        let path = entry.path();
        let is_jpg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg"));

        if path.is_file() && is_jpg {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}
