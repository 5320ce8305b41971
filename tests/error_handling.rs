//! Failure behavior of a run: recovered search errors, download and write
//! policies, directory errors and missing credentials

mod common;

use common::{disk_fetcher, run_date, serving, SEARCH_URL};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use tempfile::TempDir;
use unsplash_wallpapers::test_utils::{photo_json, search_json, MockHttpClient};
use unsplash_wallpapers::{run, AccessKey, DownloadFailurePolicy, FetchConfig, WallpaperError};

#[tokio::test]
async fn test_search_500_returns_normally_without_files() {
    let temp_dir = TempDir::new().unwrap();
    let client = MockHttpClient::new().with_status(SEARCH_URL, 500);
    let fetcher = disk_fetcher(client, temp_dir.path(), DownloadFailurePolicy::Skip);

    let summary = run(&fetcher, run_date(), &mut ChaCha8Rng::seed_from_u64(1))
        .await
        .unwrap();

    assert_eq!(summary.total_saved(), 0);
    assert!(summary.desktop.search_error.is_some());
    assert!(summary.mobile.search_error.is_some());

    // Directories exist but are empty
    let desktop = summary.base_dir.join("desktop");
    assert!(desktop.is_dir());
    assert_eq!(fs::read_dir(&desktop).unwrap().count(), 0);
}

#[tokio::test]
async fn test_download_failure_aborts_run_under_abort_policy() {
    let temp_dir = TempDir::new().unwrap();
    let client = MockHttpClient::new()
        .with_json(
            SEARCH_URL,
            200,
            &search_json(vec![photo_json("ok", false, "A"), photo_json("bad", false, "B")]),
        )
        .with_network_error("https://images.unsplash.com/bad", "connection reset")
        .with_bytes("https://images.unsplash.com/", b"img");
    let fetcher = disk_fetcher(client, temp_dir.path(), DownloadFailurePolicy::Abort);

    let err = run(&fetcher, run_date(), &mut ChaCha8Rng::seed_from_u64(2))
        .await
        .unwrap_err();

    assert!(matches!(err, WallpaperError::Network(_)));
    assert!(err.to_string().contains("connection reset"));

    let base = temp_dir.path().join("wallpapers/2025-11-25");
    assert!(base.join("desktop/landscape_01.jpg").is_file());
    assert!(!base.join("desktop/landscape_02.jpg").exists());
    // Mobile batch never started
    assert!(!base.join("mobile").exists());
}

#[tokio::test]
async fn test_download_failure_skipped_under_default_policy() {
    let temp_dir = TempDir::new().unwrap();
    let client = MockHttpClient::new()
        .with_json(
            SEARCH_URL,
            200,
            &search_json(vec![photo_json("bad", false, "A"), photo_json("ok", false, "B")]),
        )
        .with_status("https://images.unsplash.com/bad", 404)
        .with_bytes("https://images.unsplash.com/", b"img");
    let fetcher = disk_fetcher(client, temp_dir.path(), DownloadFailurePolicy::Skip);

    let summary = run(&fetcher, run_date(), &mut ChaCha8Rng::seed_from_u64(3))
        .await
        .unwrap();

    assert_eq!(summary.total_failed(), 2);
    assert_eq!(summary.total_saved(), 2);
    assert!(summary.base_dir.join("desktop/landscape_02.jpg").is_file());
    assert!(summary.base_dir.join("mobile/portrait_02.jpg").is_file());
    assert!(!summary.base_dir.join("mobile/portrait_01.jpg").exists());
}

#[tokio::test]
async fn test_blocked_file_path_skips_to_mobile_batch() {
    let temp_dir = TempDir::new().unwrap();
    // A directory sitting where the first desktop file should go
    let blocker = temp_dir
        .path()
        .join("wallpapers/2025-11-25/desktop/landscape_01.jpg");
    fs::create_dir_all(&blocker).unwrap();

    let client = serving(
        vec![photo_json("a", false, "A"), photo_json("b", false, "B")],
        b"img",
    );
    let fetcher = disk_fetcher(client, temp_dir.path(), DownloadFailurePolicy::Skip);

    let summary = run(&fetcher, run_date(), &mut ChaCha8Rng::seed_from_u64(7))
        .await
        .unwrap();

    assert_eq!(summary.desktop.failed.len(), 1);
    assert!(summary.desktop.saved.is_empty());
    assert!(!summary.base_dir.join("desktop/landscape_02.jpg").exists());
    assert_eq!(summary.mobile.saved_count(), 2);

    let portrait_searches = fetcher
        .client()
        .requests()
        .iter()
        .filter(|r| r.query_param("orientation") == Some("portrait"))
        .count();
    assert_eq!(portrait_searches, 1);
}

#[tokio::test]
async fn test_blocked_file_path_is_fatal_under_abort_policy() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir
        .path()
        .join("wallpapers/2025-11-25/desktop/landscape_01.jpg");
    fs::create_dir_all(&blocker).unwrap();

    let client = serving(vec![photo_json("a", false, "A")], b"img");
    let fetcher = disk_fetcher(client, temp_dir.path(), DownloadFailurePolicy::Abort);

    let err = run(&fetcher, run_date(), &mut ChaCha8Rng::seed_from_u64(7))
        .await
        .unwrap_err();

    assert!(matches!(err, WallpaperError::Io(_)));
}

#[tokio::test]
async fn test_unwritable_output_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file where the wallpapers directory should go
    fs::write(temp_dir.path().join("wallpapers"), b"not a directory").unwrap();

    let client = MockHttpClient::new().with_json(SEARCH_URL, 200, &search_json(vec![]));
    let fetcher = disk_fetcher(client, temp_dir.path(), DownloadFailurePolicy::Skip);

    let err = run(&fetcher, run_date(), &mut ChaCha8Rng::seed_from_u64(4))
        .await
        .unwrap_err();

    assert!(matches!(err, WallpaperError::Io(_)));
    assert!(fetcher.client().requests().is_empty());
}

#[test]
fn test_blank_credential_rejected_at_config_time() {
    let err = FetchConfig::builder()
        .access_key("")
        .output_root("/tmp")
        .build()
        .unwrap_err();
    assert!(matches!(err, WallpaperError::MissingCredential("UNSPLASH_ACCESS_KEY")));

    assert!(AccessKey::new("\t\n").is_err());
}
