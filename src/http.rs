//! HTTP capability used by the fetcher
//!
//! The pipeline only needs "GET a URL with query, headers and a timeout, give
//! me the status and body". Keeping that behind [`HttpClient`] lets tests drive
//! the fetcher with canned responses instead of a live network.

use crate::error::{Result, WallpaperError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// A GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    #[must_use]
    pub fn get<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query.extend(query);
        self
    }

    #[must_use]
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// First header value with this name (case-insensitive)
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// First query parameter with this name
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`WallpaperError::HttpStatus`]
    pub fn error_for_status(self, url: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(WallpaperError::http_status(self.status, url))
        }
    }
}

/// Minimal async GET capability
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform the request; transport failures are errors, any status is not
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`HttpClient`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Create a new client
    ///
    /// # Errors
    /// - Failed to create HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| WallpaperError::network_error("Failed to create HTTP client", e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse> {
        tracing::debug!(url = %request.url, "GET");

        let mut builder = self.client.get(&request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            WallpaperError::network_error(format!("Failed to request {}", request.url), e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            WallpaperError::network_error(format!("Failed to read body of {}", request.url), e)
        })?;

        tracing::debug!(
            url = %request.url,
            status = status,
            bytes = body.len(),
            "Response received"
        );

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
