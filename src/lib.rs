#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::uninlined_format_args)]

//! # Unsplash Wallpapers
//!
//! Fetches a small daily batch of wallpapers from the Unsplash photo search
//! API, drops premium (Unsplash+) results, and saves the rest under
//! `wallpapers/<YYYY-MM-DD>/{desktop,mobile}`.
//!
//! ## Pipeline
//!
//! 1. Pick one or two random themes as the search query ([`select_theme`])
//! 2. Search for landscape photos at 3840x2160, save them to `desktop/`
//! 3. Search for portrait photos at 1440x2960, save them to `mobile/`
//!
//! Files are named `<orientation>_<NN>.jpg` where `NN` is the photo's position
//! in the search results, so a skipped premium photo leaves a gap.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use unsplash_wallpapers::{run, today, FetchConfig, FsWriter, ReqwestClient, WallpaperFetcher};
//! use rand::SeedableRng;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = FetchConfig::builder()
//!     .access_key("your-access-key")
//!     .output_root("/home/me/Pictures")
//!     .build()?;
//!
//! let fetcher = WallpaperFetcher::new(ReqwestClient::new()?, FsWriter, config);
//! let mut rng = rand_chacha::ChaCha8Rng::from_entropy();
//! let summary = run(&fetcher, today(), &mut rng).await?;
//! println!("saved {} wallpapers to {}", summary.total_saved(), summary.base_dir.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): command-line interface, progress bar and tracing setup
//! - `tracing-json`: JSON log output for the CLI

pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod progress;
pub mod run;
pub mod storage;
pub mod test_utils;
pub mod theme;
#[cfg(feature = "cli")]
pub mod tracing_config;
pub mod unsplash;

// Public API exports
pub use archive::{list_dates, list_entry, ArchiveEntry};
pub use config::{
    AccessKey, DownloadFailurePolicy, FetchConfig, FetchConfigBuilder, Orientation, Resolution,
};
pub use error::{Result, WallpaperError};
pub use fetcher::{FailedDownload, FetchReport, SavedWallpaper, WallpaperFetcher};
pub use http::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};
pub use run::{run, today, RunSummary};
pub use storage::{FileWriter, FsWriter};
pub use theme::{select_theme, WALLPAPER_THEMES};
pub use unsplash::{Photo, SearchQuery, SearchResponse};

#[cfg(feature = "cli")]
pub use tracing_config::{TracingConfig, TracingFormat};
