//! Search, filter and download one orientation's batch of wallpapers

use crate::config::{DownloadFailurePolicy, FetchConfig, Orientation, Resolution};
use crate::error::Result;
use crate::http::{HttpClient, HttpRequest};
use crate::progress::ProgressIndicator;
use crate::storage::{wallpaper_file_name, FileWriter};
use crate::theme::select_theme;
use crate::unsplash::{parse_search_response, Photo, SearchQuery};
use serde_json::Value;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// A wallpaper written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedWallpaper {
    /// Position of the photo in the search results, starting at 1
    pub index: usize,
    pub photo_id: String,
    pub author: String,
    pub path: PathBuf,
}

/// A photo that could not be downloaded or written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDownload {
    pub index: usize,
    pub photo_id: String,
    pub error: String,
}

/// Outcome of fetching one orientation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    pub orientation: Orientation,
    /// Search query that was sent
    pub query: String,
    pub output_dir: PathBuf,
    pub saved: Vec<SavedWallpaper>,
    /// Ids of premium photos that were not downloaded
    pub skipped_premium: Vec<String>,
    /// Result positions of records that could not be decoded
    pub invalid_records: Vec<usize>,
    pub failed: Vec<FailedDownload>,
    /// Set when the search call itself failed
    pub search_error: Option<String>,
}

impl FetchReport {
    fn new(orientation: Orientation, query: String, output_dir: &Path) -> Self {
        Self {
            orientation,
            query,
            output_dir: output_dir.to_path_buf(),
            saved: Vec::new(),
            skipped_premium: Vec::new(),
            invalid_records: Vec::new(),
            failed: Vec::new(),
            search_error: None,
        }
    }

    #[must_use]
    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }
}

/// Fetches wallpapers through an [`HttpClient`] and stores them with a [`FileWriter`]
pub struct WallpaperFetcher<C, W> {
    client: C,
    writer: W,
    config: FetchConfig,
    show_progress: bool,
}

impl<C: HttpClient, W: FileWriter> WallpaperFetcher<C, W> {
    #[must_use]
    pub fn new(client: C, writer: W, config: FetchConfig) -> Self {
        Self {
            client,
            writer,
            config,
            show_progress: false,
        }
    }

    /// Show a progress bar while downloading
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Fetch one batch of wallpapers into `output_dir` using a random theme
    ///
    /// A failed search is logged and yields an empty report. Premium photos and
    /// unreadable records are skipped. Download and write failures follow the
    /// configured [`DownloadFailurePolicy`]; under `Skip` a write failure
    /// still ends the batch early.
    ///
    /// # Errors
    /// - The output directory cannot be created
    /// - A download or write failed and the policy is [`DownloadFailurePolicy::Abort`]
    pub async fn fetch<R: Rng + ?Sized>(
        &self,
        orientation: Orientation,
        resolution: Resolution,
        output_dir: &Path,
        rng: &mut R,
    ) -> Result<FetchReport> {
        let query = select_theme(rng);
        self.fetch_with_query(orientation, resolution, output_dir, query)
            .await
    }

    /// Same as [`fetch`](Self::fetch) with an explicit search query
    pub async fn fetch_with_query(
        &self,
        orientation: Orientation,
        resolution: Resolution,
        output_dir: &Path,
        query: String,
    ) -> Result<FetchReport> {
        self.writer.create_dir_all(output_dir).await?;

        info!(
            "📥 Fetching {} wallpapers at {} (theme: {})",
            orientation.kind_dir(),
            resolution,
            query
        );

        let mut report = FetchReport::new(orientation, query.clone(), output_dir);
        let search = SearchQuery {
            query,
            orientation,
            per_page: self.config.per_page,
            resolution,
        };

        let records = match self.search(&search).await {
            Ok(records) => records,
            Err(e) => {
                error!("❌ Fetch failed for {} wallpapers: {}", orientation, e);
                report.search_error = Some(e.to_string());
                return Ok(report);
            },
        };

        if records.is_empty() {
            warn!(
                "⚠️  No {} wallpapers found (theme: {})",
                orientation, report.query
            );
            return Ok(report);
        }

        debug!(count = records.len(), "Search returned records");
        let progress = ProgressIndicator::for_photos(records.len() as u64, self.show_progress);

        // Index follows result order, so a skipped record leaves a gap
        for (index, record) in records.iter().enumerate().map(|(i, r)| (i + 1, r)) {
            let photo = match Photo::from_record(record) {
                Ok(photo) => photo,
                Err(e) => {
                    warn!("⚠️  Skipping unreadable record #{}: {}", index, e);
                    report.invalid_records.push(index);
                    progress.advance();
                    continue;
                },
            };

            if photo.is_premium() {
                info!("⏭️  Skipping premium photo: {}", photo.id);
                report.skipped_premium.push(photo.id.clone());
                progress.advance();
                continue;
            }

            let path = output_dir.join(wallpaper_file_name(orientation.as_str(), index));
            progress.set_message(path.display().to_string());

            match self.save_photo(&photo, resolution, &path).await {
                Ok(()) => {
                    info!("✅ Saved {} (by {})", path.display(), photo.author());
                    report.saved.push(SavedWallpaper {
                        index,
                        photo_id: photo.id.clone(),
                        author: photo.author().to_string(),
                        path,
                    });
                },
                Err(e) => {
                    let is_remote = e.is_remote();
                    match self.config.failure_policy {
                        DownloadFailurePolicy::Abort => {
                            progress.finish_with_message("❌ Save failed".to_string());
                            return Err(e);
                        },
                        DownloadFailurePolicy::Skip => {
                            error!("❌ Failed to save photo {}: {}", photo.id, e);
                            report.failed.push(FailedDownload {
                                index,
                                photo_id: photo.id.clone(),
                                error: e.to_string(),
                            });

                            // A local write failure ends this orientation
                            if !is_remote {
                                progress.finish_with_message("❌ Write failed".to_string());
                                return Ok(report);
                            }
                        },
                    }
                },
            }

            progress.advance();
        }

        progress.finish_with_message(format!(
            "✅ {} {} wallpaper(s)",
            report.saved_count(),
            orientation.kind_dir()
        ));
        Ok(report)
    }

    /// Run the search call and return its raw result records
    async fn search(&self, search: &SearchQuery) -> Result<Vec<Value>> {
        let request = search.to_request(
            &self.config.search_endpoint,
            &self.config.access_key,
            &self.config.user_agent,
            self.config.search_timeout,
        );

        let response = self
            .client
            .get(request)
            .await?
            .error_for_status(&self.config.search_endpoint)?;

        Ok(parse_search_response(&response.body)?.results)
    }

    /// Download one photo and write it verbatim to `path`
    async fn save_photo(&self, photo: &Photo, resolution: Resolution, path: &Path) -> Result<()> {
        let url = photo.image_url(resolution);
        debug!(photo_id = %photo.id, url = %url, "Downloading photo");

        let request = HttpRequest::get(url.as_str()).with_timeout(self.config.download_timeout);
        let response = self.client.get(request).await?.error_for_status(&url)?;

        self.writer.write(path, &response.body).await
    }
}
