//! Test utilities: mock HTTP client and in-memory file writer
//!
//! These implement [`HttpClient`] and [`FileWriter`] so the fetch pipeline can
//! be exercised without network or disk access. Public so integration tests
//! and downstream crates can drive a [`WallpaperFetcher`](crate::WallpaperFetcher)
//! the same way.

use crate::{
    error::{Result, WallpaperError},
    http::{HttpClient, HttpRequest, HttpResponse},
    storage::FileWriter,
};
use async_trait::async_trait;
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Lock a history mutex, tolerating poisoning from a panicked test
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Canned reply for a URL prefix
#[derive(Debug, Clone)]
pub enum MockReply {
    Response(HttpResponse),
    NetworkError(String),
}

/// Mock HTTP client answering by URL prefix
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Routes are matched in insertion order
    routes: Vec<(String, MockReply)>,
    /// Request history for verification in tests
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on<S: Into<String>>(mut self, url_prefix: S, reply: MockReply) -> Self {
        self.routes.push((url_prefix.into(), reply));
        self
    }

    #[must_use]
    pub fn with_json<S: Into<String>>(self, url_prefix: S, status: u16, body: &serde_json::Value) -> Self {
        self.on(
            url_prefix,
            MockReply::Response(HttpResponse::new(status, body.to_string().into_bytes())),
        )
    }

    #[must_use]
    pub fn with_bytes<S: Into<String>>(self, url_prefix: S, bytes: &[u8]) -> Self {
        self.on(
            url_prefix,
            MockReply::Response(HttpResponse::new(200, bytes.to_vec())),
        )
    }

    #[must_use]
    pub fn with_status<S: Into<String>>(self, url_prefix: S, status: u16) -> Self {
        self.on(url_prefix, MockReply::Response(HttpResponse::new(status, Vec::new())))
    }

    #[must_use]
    pub fn with_network_error<S: Into<String>>(self, url_prefix: S, message: &str) -> Self {
        self.on(url_prefix, MockReply::NetworkError(message.to_string()))
    }

    /// All requests seen so far, in order
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// URLs of all requests seen so far
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse> {
        lock(&self.requests).push(request.clone());

        let reply = self
            .routes
            .iter()
            .find(|(prefix, _)| request.url.starts_with(prefix.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::NetworkError(message)) => Err(WallpaperError::network_error(
                format!("Failed to request {}", request.url),
                message,
            )),
            None => Ok(HttpResponse::new(404, Vec::new())),
        }
    }
}

/// In-memory file writer
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
    files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
    fail_writes: bool,
    fail_dirs: bool,
}

impl MemoryWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer whose file writes fail with permission denied
    #[must_use]
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Writer whose directory creation fails with permission denied
    #[must_use]
    pub fn failing_dirs() -> Self {
        Self {
            fail_dirs: true,
            ..Self::default()
        }
    }

    pub fn files(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        lock(&self.files).clone()
    }

    /// File names (without directories) written so far, sorted
    pub fn file_names(&self) -> Vec<String> {
        self.files()
            .keys()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect()
    }

    pub fn dirs(&self) -> BTreeSet<PathBuf> {
        lock(&self.dirs).clone()
    }
}

#[async_trait]
impl FileWriter for MemoryWriter {
    async fn create_dir_all(&self, dir: &Path) -> Result<()> {
        if self.fail_dirs {
            let e = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
            return Err(WallpaperError::file_io_error("create output directory", dir, &e));
        }
        lock(&self.dirs).insert(dir.to_path_buf());
        Ok(())
    }

    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if self.fail_writes {
            let e = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
            return Err(WallpaperError::file_io_error("write wallpaper", path, &e));
        }
        lock(&self.files).insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

/// JSON for one search result
pub fn photo_json(id: &str, premium: bool, author: &str) -> serde_json::Value {
    json!({
        "id": id,
        "premium": premium,
        "urls": { "raw": format!("https://images.unsplash.com/{id}?ixid=test") },
        "user": { "name": author }
    })
}

/// JSON for a full search response
pub fn search_json(results: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "total": results.len(),
        "total_pages": 1,
        "results": results
    })
}
