//! Unsplash search API wire types and request construction

use crate::config::{AccessKey, Orientation, Resolution};
use crate::error::{Result, WallpaperError};
use crate::http::HttpRequest;
use serde::Deserialize;
use std::time::Duration;

/// Ordering directive sent with every search
pub const ORDER_BY_LATEST: &str = "latest";

/// Author shown when a record carries no user name
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Top-level search response; only `results` is used
///
/// Records stay undecoded so one malformed entry does not discard the page;
/// see [`Photo::from_record`].
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<serde_json::Value>,
}

/// One search result
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: String,
    /// Unsplash+ flag; absent or null means free
    #[serde(default)]
    pub premium: Option<bool>,
    pub urls: PhotoUrls,
    #[serde(default)]
    pub user: Option<PhotoUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUrls {
    pub raw: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUser {
    #[serde(default)]
    pub name: Option<String>,
}

impl Photo {
    /// Decode a single search record
    ///
    /// Fails when `id` or `urls.raw` is missing or not a string.
    pub fn from_record(record: &serde_json::Value) -> Result<Self> {
        Self::deserialize(record).map_err(WallpaperError::from)
    }

    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.premium.unwrap_or(false)
    }

    /// Photographer name, or [`UNKNOWN_AUTHOR`]
    #[must_use]
    pub fn author(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|user| user.name.as_deref())
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Direct image URL cropped to exactly `resolution`
    #[must_use]
    pub fn image_url(&self, resolution: Resolution) -> String {
        build_image_url(&self.urls.raw, resolution)
    }
}

/// Append size and crop-fill parameters to a raw image URL
#[must_use]
pub fn build_image_url(raw: &str, resolution: Resolution) -> String {
    let separator = if raw.contains('?') { '&' } else { '?' };
    format!(
        "{}{}w={}&h={}&crop=fill",
        raw, separator, resolution.width, resolution.height
    )
}

/// Parameters of one photo search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub orientation: Orientation,
    pub per_page: u8,
    pub resolution: Resolution,
}

impl SearchQuery {
    /// Query-string pairs in the order the endpoint documents them
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        vec![
            ("query".to_string(), self.query.clone()),
            ("orientation".to_string(), self.orientation.as_str().to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
            ("w".to_string(), self.resolution.width.to_string()),
            ("h".to_string(), self.resolution.height.to_string()),
            ("order_by".to_string(), ORDER_BY_LATEST.to_string()),
        ]
    }

    /// Build the authenticated search request
    #[must_use]
    pub fn to_request(
        &self,
        endpoint: &str,
        access_key: &AccessKey,
        user_agent: &str,
        timeout: Duration,
    ) -> HttpRequest {
        HttpRequest::get(endpoint)
            .with_query(self.params())
            .with_header("Authorization", access_key.authorization_header())
            .with_header("User-Agent", user_agent)
            .with_timeout(timeout)
    }
}

/// Decode a search response body
pub fn parse_search_response(body: &[u8]) -> Result<SearchResponse> {
    serde_json::from_slice(body).map_err(WallpaperError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: &str = r#"{
        "total": 133,
        "total_pages": 14,
        "results": [
            {
                "id": "eOLpJytrbsQ",
                "premium": false,
                "width": 4000,
                "urls": {
                    "raw": "https://images.unsplash.com/photo-1?ixid=abc",
                    "full": "https://images.unsplash.com/photo-1?ixid=abc&q=85"
                },
                "user": { "name": "Jeff Sheldon", "username": "ugmonk" }
            },
            {
                "id": "plus001",
                "premium": true,
                "urls": { "raw": "https://plus.unsplash.com/premium_photo-2?ixid=def" },
                "user": { "name": "Getty Images" }
            },
            {
                "id": "noflag",
                "urls": { "raw": "https://images.unsplash.com/photo-3?ixid=ghi" },
                "user": { "name": "Anonymous" }
            }
        ]
    }"#;

    #[test]
    fn test_parse_search_response() {
        let response = parse_search_response(SAMPLE.as_bytes()).unwrap();
        assert_eq!(response.results.len(), 3);

        let photos: Vec<Photo> = response
            .results
            .iter()
            .map(|record| Photo::from_record(record).unwrap())
            .collect();

        assert_eq!(photos[0].id, "eOLpJytrbsQ");
        assert!(!photos[0].is_premium());
        assert_eq!(photos[0].author(), "Jeff Sheldon");

        assert!(photos[1].is_premium());
        // Missing flag is treated as free
        assert!(!photos[2].is_premium());
    }

    #[test]
    fn test_null_premium_flag_is_free() {
        let record = json!({
            "id": "nullflag",
            "premium": null,
            "urls": { "raw": "https://images.unsplash.com/photo-4" },
            "user": { "name": "Vivian Maier" }
        });

        let photo = Photo::from_record(&record).unwrap();
        assert!(!photo.is_premium());
        assert_eq!(photo.author(), "Vivian Maier");
    }

    #[test]
    fn test_missing_or_null_author_falls_back() {
        let null_name = json!({
            "id": "a",
            "urls": { "raw": "https://images.unsplash.com/photo-a" },
            "user": { "name": null }
        });
        let no_user = json!({
            "id": "b",
            "urls": { "raw": "https://images.unsplash.com/photo-b" }
        });

        assert_eq!(Photo::from_record(&null_name).unwrap().author(), UNKNOWN_AUTHOR);
        assert_eq!(Photo::from_record(&no_user).unwrap().author(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_record_without_raw_url_rejected() {
        let missing = json!({ "id": "c", "urls": {}, "user": { "name": "X" } });
        let null_raw = json!({ "id": "d", "urls": { "raw": null } });

        assert!(matches!(
            Photo::from_record(&missing),
            Err(WallpaperError::Json(_))
        ));
        assert!(Photo::from_record(&null_raw).is_err());
    }

    #[test]
    fn test_odd_record_does_not_fail_the_page() {
        let body = json!({
            "results": [
                { "id": "ok", "urls": { "raw": "https://images.unsplash.com/ok" } },
                { "id": "broken", "premium": null, "urls": { "raw": null } }
            ]
        })
        .to_string();

        let response = parse_search_response(body.as_bytes()).unwrap();
        assert_eq!(response.results.len(), 2);
        assert!(Photo::from_record(&response.results[0]).is_ok());
        assert!(Photo::from_record(&response.results[1]).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_results() {
        let err = parse_search_response(br#"{"errors": ["OAuth error"]}"#).unwrap_err();
        assert!(matches!(err, WallpaperError::Json(_)));

        assert!(parse_search_response(b"<html>rate limited</html>").is_err());
    }

    #[test]
    fn test_image_url_appends_crop_fill() {
        let url = build_image_url(
            "https://images.unsplash.com/photo-1?ixid=abc",
            Resolution::DESKTOP,
        );
        assert_eq!(
            url,
            "https://images.unsplash.com/photo-1?ixid=abc&w=3840&h=2160&crop=fill"
        );

        let bare = build_image_url("https://images.unsplash.com/photo-1", Resolution::MOBILE);
        assert_eq!(
            bare,
            "https://images.unsplash.com/photo-1?w=1440&h=2960&crop=fill"
        );
    }

    #[test]
    fn test_search_params() {
        let query = SearchQuery {
            query: "snowy mountain".to_string(),
            orientation: Orientation::Landscape,
            per_page: 10,
            resolution: Resolution::DESKTOP,
        };

        let params = query.params();
        let expected = [
            ("query", "snowy mountain"),
            ("orientation", "landscape"),
            ("per_page", "10"),
            ("w", "3840"),
            ("h", "2160"),
            ("order_by", "latest"),
        ];
        assert_eq!(params.len(), expected.len());
        for ((key, value), (want_key, want_value)) in params.iter().zip(expected) {
            assert_eq!(key, want_key);
            assert_eq!(value, want_value);
        }
    }

    #[test]
    fn test_search_request_headers() {
        let query = SearchQuery {
            query: "twilight sky".to_string(),
            orientation: Orientation::Portrait,
            per_page: 5,
            resolution: Resolution::MOBILE,
        };
        let key = AccessKey::new("abc123").unwrap();
        let request = query.to_request(
            "https://api.unsplash.com/search/photos",
            &key,
            "test-agent",
            Duration::from_secs(30),
        );

        assert_eq!(request.url, "https://api.unsplash.com/search/photos");
        assert_eq!(request.header("Authorization"), Some("Client-ID abc123"));
        assert_eq!(request.header("User-Agent"), Some("test-agent"));
        assert_eq!(request.timeout, Some(Duration::from_secs(30)));
        assert_eq!(request.query_param("orientation"), Some("portrait"));
    }
}
