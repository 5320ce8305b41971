//! Error types for wallpaper fetching operations

use thiserror::Error;

/// Result type alias for wallpaper fetching operations
pub type Result<T> = std::result::Result<T, WallpaperError>;

/// Error types for wallpaper fetching operations
#[derive(Error, Debug)]
pub enum WallpaperError {
    /// Input/output errors (permission denied, disk full, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level failure: connection refused, DNS, timeout
    #[error("Network error: {0}")]
    Network(String),

    /// The remote end answered with a non-success status
    #[error("HTTP error {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Response body could not be decoded
    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The Unsplash access key was not provided
    #[error("Unsplash access key not found. Set the {0} environment variable or pass --access-key")]
    MissingCredential(&'static str),
}

impl WallpaperError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a network error with request context
    pub fn network_error<S: AsRef<str>, E: std::fmt::Display>(context: S, error: E) -> Self {
        Self::Network(format!("{}: {}", context.as_ref(), error))
    }

    /// Create an HTTP status error for the given URL
    pub fn http_status<S: Into<String>>(status: u16, url: S) -> Self {
        Self::HttpStatus {
            status,
            url: url.into(),
        }
    }

    /// Create file I/O error with operation context
    pub fn file_io_error<P: AsRef<std::path::Path>>(
        operation: &str,
        path: P,
        error: &std::io::Error,
    ) -> Self {
        let path_display = path.as_ref().display();
        Self::Io(std::io::Error::new(
            error.kind(),
            format!("Failed to {} '{}': {}", operation, path_display, error),
        ))
    }

    /// Whether this error came from the network side (transport, status or body)
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::HttpStatus { .. } | Self::Json(_)
        )
    }
}
