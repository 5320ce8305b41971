//! Daily run: one landscape batch, then one portrait batch

use crate::config::Orientation;
use crate::error::Result;
use crate::fetcher::{FetchReport, WallpaperFetcher};
use crate::http::HttpClient;
use crate::storage::{date_dir, FileWriter};
use chrono::NaiveDate;
use rand::Rng;
use std::path::PathBuf;
use tracing::info;

/// Date format of the per-run directory
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of a full run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// `<root>/wallpapers/<date>`
    pub base_dir: PathBuf,
    pub desktop: FetchReport,
    pub mobile: FetchReport,
}

impl RunSummary {
    #[must_use]
    pub fn total_saved(&self) -> usize {
        self.desktop.saved_count() + self.mobile.saved_count()
    }

    #[must_use]
    pub fn total_failed(&self) -> usize {
        self.desktop.failed.len() + self.mobile.failed.len()
    }
}

/// Today's date in local time
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Fetch the desktop batch and then the mobile batch for `date`
///
/// The mobile batch runs whatever happened to the desktop batch; only errors
/// the fetcher returns (directory creation failures, or download and write
/// failures under the abort policy) stop the run early.
pub async fn run<C, W, R>(
    fetcher: &WallpaperFetcher<C, W>,
    date: NaiveDate,
    rng: &mut R,
) -> Result<RunSummary>
where
    C: HttpClient,
    W: FileWriter,
    R: Rng + ?Sized,
{
    let config = fetcher.config();
    let base_dir = date_dir(&config.output_root, &date.format(DATE_FORMAT).to_string());
    info!(date = %date, "🚀 Starting wallpaper run into {}", base_dir.display());

    let desktop = fetcher
        .fetch(
            Orientation::Landscape,
            config.resolution_for(Orientation::Landscape),
            &base_dir.join(Orientation::Landscape.kind_dir()),
            rng,
        )
        .await?;

    let mobile = fetcher
        .fetch(
            Orientation::Portrait,
            config.resolution_for(Orientation::Portrait),
            &base_dir.join(Orientation::Portrait.kind_dir()),
            rng,
        )
        .await?;

    info!("🎉 Done! All wallpapers saved to {}", base_dir.display());

    Ok(RunSummary {
        base_dir,
        desktop,
        mobile,
    })
}
