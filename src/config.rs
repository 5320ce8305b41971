//! Configuration types for wallpaper fetch runs

use crate::error::{Result, WallpaperError};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the Unsplash access key
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Unsplash photo search endpoint
pub const SEARCH_ENDPOINT: &str = "https://api.unsplash.com/search/photos";

/// Number of results requested per orientation
pub const DEFAULT_PER_PAGE: u8 = 10;

/// Largest page size the search endpoint accepts
pub const MAX_PER_PAGE: u8 = 30;

/// Timeout for the search call
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for a single image download
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(20);

/// Generic client identification sent with the search call
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Screen orientation of a wallpaper batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Wide images for desktop screens
    Landscape,
    /// Tall images for phones
    Portrait,
}

impl Orientation {
    /// Value of the `orientation` search parameter, also the saved file prefix
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }

    /// Name of the per-date output directory for this orientation
    #[must_use]
    pub fn kind_dir(self) -> &'static str {
        match self {
            Self::Landscape => "desktop",
            Self::Portrait => "mobile",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target resolution in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// 4K landscape
    pub const DESKTOP: Self = Self::new(3840, 2160);
    /// Tall 4K-class phone screens
    pub const MOBILE: Self = Self::new(1440, 2960);

    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// What to do when a single image download or file write fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadFailurePolicy {
    /// Log the failure and continue; a write failure ends the current
    /// orientation but not the run
    #[default]
    Skip,
    /// Stop the whole run and return the error
    Abort,
}

/// Unsplash API access key
///
/// The key never appears in `Debug` output so configs can be logged freely.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    /// Wrap a key, rejecting empty or whitespace-only values
    pub fn new<S: Into<String>>(key: S) -> Result<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(WallpaperError::MissingCredential(ACCESS_KEY_ENV));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Read the key from `UNSPLASH_ACCESS_KEY`
    pub fn from_env() -> Result<Self> {
        match std::env::var(ACCESS_KEY_ENV) {
            Ok(value) => Self::new(value),
            Err(_) => Err(WallpaperError::MissingCredential(ACCESS_KEY_ENV)),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Client-ID {}", self.0)
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(***)")
    }
}

/// Complete configuration for one fetch run
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Credential sent with every search call
    pub access_key: AccessKey,
    /// Results requested per orientation
    pub per_page: u8,
    /// Resolution for the landscape batch
    pub desktop: Resolution,
    /// Resolution for the portrait batch
    pub mobile: Resolution,
    /// Search endpoint URL
    pub search_endpoint: String,
    pub search_timeout: Duration,
    pub download_timeout: Duration,
    pub user_agent: String,
    pub failure_policy: DownloadFailurePolicy,
    /// Directory under which `wallpapers/<date>` is created
    pub output_root: PathBuf,
}

impl FetchConfig {
    /// Create a builder for fetch configuration
    #[must_use]
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }

    /// Target resolution for an orientation
    #[must_use]
    pub fn resolution_for(&self, orientation: Orientation) -> Resolution {
        match orientation {
            Orientation::Landscape => self.desktop,
            Orientation::Portrait => self.mobile,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(WallpaperError::invalid_config(format!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.per_page
            )));
        }

        for (name, resolution) in [("desktop", self.desktop), ("mobile", self.mobile)] {
            if resolution.width == 0 || resolution.height == 0 {
                return Err(WallpaperError::invalid_config(format!(
                    "{} resolution must be non-zero, got {}",
                    name, resolution
                )));
            }
        }

        if self.search_endpoint.is_empty() {
            return Err(WallpaperError::invalid_config(
                "search endpoint cannot be empty",
            ));
        }

        Ok(())
    }
}

/// Builder for [`FetchConfig`]
#[derive(Debug, Clone)]
pub struct FetchConfigBuilder {
    access_key: Option<String>,
    per_page: u8,
    desktop: Resolution,
    mobile: Resolution,
    search_endpoint: String,
    search_timeout: Duration,
    download_timeout: Duration,
    user_agent: String,
    failure_policy: DownloadFailurePolicy,
    output_root: Option<PathBuf>,
}

impl Default for FetchConfigBuilder {
    fn default() -> Self {
        Self {
            access_key: None,
            per_page: DEFAULT_PER_PAGE,
            desktop: Resolution::DESKTOP,
            mobile: Resolution::MOBILE,
            search_endpoint: SEARCH_ENDPOINT.to_string(),
            search_timeout: SEARCH_TIMEOUT,
            download_timeout: DOWNLOAD_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            failure_policy: DownloadFailurePolicy::default(),
            output_root: None,
        }
    }
}

impl FetchConfigBuilder {
    #[must_use]
    pub fn access_key<S: Into<String>>(mut self, key: S) -> Self {
        self.access_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page;
        self
    }

    #[must_use]
    pub fn desktop(mut self, resolution: Resolution) -> Self {
        self.desktop = resolution;
        self
    }

    #[must_use]
    pub fn mobile(mut self, resolution: Resolution) -> Self {
        self.mobile = resolution;
        self
    }

    #[must_use]
    pub fn search_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.search_endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = timeout;
        self
    }

    #[must_use]
    pub fn download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn failure_policy(mut self, policy: DownloadFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    #[must_use]
    pub fn output_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.output_root = Some(root.into());
        self
    }

    /// Build and validate the configuration
    ///
    /// Falls back to `UNSPLASH_ACCESS_KEY` when no key was set explicitly and
    /// to the current directory when no output root was given.
    pub fn build(self) -> Result<FetchConfig> {
        let access_key = match self.access_key {
            Some(key) => AccessKey::new(key)?,
            None => AccessKey::from_env()?,
        };

        let output_root = match self.output_root {
            Some(root) => root,
            None => std::env::current_dir().map_err(|e| {
                WallpaperError::file_io_error("resolve current directory", ".", &e)
            })?,
        };

        let config = FetchConfig {
            access_key,
            per_page: self.per_page,
            desktop: self.desktop,
            mobile: self.mobile,
            search_endpoint: self.search_endpoint,
            search_timeout: self.search_timeout,
            download_timeout: self.download_timeout,
            user_agent: self.user_agent,
            failure_policy: self.failure_policy,
            output_root,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> FetchConfigBuilder {
        FetchConfig::builder()
            .access_key("test-key")
            .output_root("/tmp/wallpapers-test")
    }

    #[test]
    fn test_default_values() {
        let config = builder().build().unwrap();
        assert_eq!(config.per_page, 10);
        assert_eq!(config.desktop, Resolution::new(3840, 2160));
        assert_eq!(config.mobile, Resolution::new(1440, 2960));
        assert_eq!(config.search_endpoint, "https://api.unsplash.com/search/photos");
        assert_eq!(config.search_timeout, Duration::from_secs(30));
        assert_eq!(config.download_timeout, Duration::from_secs(20));
        assert_eq!(config.failure_policy, DownloadFailurePolicy::Skip);
    }

    #[test]
    fn test_blank_access_key_rejected() {
        let err = FetchConfig::builder()
            .access_key("   ")
            .output_root("/tmp")
            .build()
            .unwrap_err();
        assert!(matches!(err, WallpaperError::MissingCredential(ACCESS_KEY_ENV)));
    }

    #[test]
    fn test_access_key_is_trimmed_and_redacted() {
        let key = AccessKey::new("  abc123 \n").unwrap();
        assert_eq!(key.as_str(), "abc123");
        assert_eq!(key.authorization_header(), "Client-ID abc123");
        assert_eq!(format!("{key:?}"), "AccessKey(***)");

        let config = builder().access_key("secret-value").build().unwrap();
        assert!(!format!("{config:?}").contains("secret-value"));
    }

    #[test]
    fn test_per_page_bounds() {
        assert!(builder().per_page(1).build().is_ok());
        assert!(builder().per_page(30).build().is_ok());

        let err = builder().per_page(0).build().unwrap_err();
        assert!(err.to_string().contains("per_page"));
        assert!(builder().per_page(31).build().is_err());
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let err = builder()
            .mobile(Resolution::new(0, 2960))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("mobile"));
    }

    #[test]
    fn test_orientation_mapping() {
        assert_eq!(Orientation::Landscape.as_str(), "landscape");
        assert_eq!(Orientation::Portrait.as_str(), "portrait");
        assert_eq!(Orientation::Landscape.kind_dir(), "desktop");
        assert_eq!(Orientation::Portrait.kind_dir(), "mobile");

        let config = builder().build().unwrap();
        assert_eq!(config.resolution_for(Orientation::Landscape), Resolution::DESKTOP);
        assert_eq!(config.resolution_for(Orientation::Portrait), Resolution::MOBILE);
    }
}
