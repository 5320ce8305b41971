//! Shared fixtures for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use std::path::Path;
use unsplash_wallpapers::test_utils::{search_json, MockHttpClient};
use unsplash_wallpapers::{DownloadFailurePolicy, FetchConfig, FsWriter, WallpaperFetcher};

pub const SEARCH_URL: &str = "https://api.unsplash.com/search/photos";
pub const IMAGE_HOST: &str = "https://images.unsplash.com/";

pub fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 25).unwrap()
}

/// Config writing under `root` with the given failure policy
pub fn fixture_config(root: &Path, policy: DownloadFailurePolicy) -> FetchConfig {
    FetchConfig::builder()
        .access_key("integration-key")
        .output_root(root)
        .failure_policy(policy)
        .build()
        .unwrap()
}

/// Fetcher writing to the real filesystem under `root`
pub fn disk_fetcher(
    client: MockHttpClient,
    root: &Path,
    policy: DownloadFailurePolicy,
) -> WallpaperFetcher<MockHttpClient, FsWriter> {
    WallpaperFetcher::new(client, FsWriter, fixture_config(root, policy))
}

/// Client answering every search with `results` and every image with `bytes`
pub fn serving(results: Vec<serde_json::Value>, bytes: &[u8]) -> MockHttpClient {
    MockHttpClient::new()
        .with_json(SEARCH_URL, 200, &search_json(results))
        .with_bytes(IMAGE_HOST, bytes)
}
