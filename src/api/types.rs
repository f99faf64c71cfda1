//! API response type definitions.

use serde::Deserialize;
use serde_json::Value;

/// Response from the OAuth2 token and invalidate endpoints.
///
/// The fields are all optional because the endpoint answers with either an
/// `access_token` or an `errors` array, never both.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

/// One entry of the API's `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(default)]
    pub code: Option<i64>,
}

/// A tweet from the v1.1 timeline endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub id: u64,
    pub text: String,
    pub created_at: String,
    #[serde(default)]
    pub entities: TweetEntities,
}

/// Entities attached to a tweet. Only media is of interest here; a tweet
/// without attachments commonly omits the `media` key entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TweetEntities {
    #[serde(default)]
    pub media: Option<Vec<MediaEntity>>,
}

/// A media attachment (photo, video thumbnail) on a tweet.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaEntity {
    pub media_url: String,
    #[serde(default)]
    pub media_url_https: Option<String>,
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,
}

impl Tweet {
    /// Media attachments of this tweet, empty when the tweet has none.
    pub fn media(&self) -> &[MediaEntity] {
        self.entities.media.as_deref().unwrap_or_default()
    }
}

impl MediaEntity {
    /// URL to fetch the raw bytes from, preferring the TLS variant.
    pub fn download_url(&self) -> &str {
        self.media_url_https.as_deref().unwrap_or(&self.media_url)
    }
}

/// One element of the `/trends/place.json` response array.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendsResult {
    #[serde(default)]
    pub trends: Vec<Trend>,
    #[serde(default)]
    pub as_of: Option<String>,
    #[serde(default)]
    pub locations: Vec<TrendLocationRef>,
}

/// A single trending topic.
#[derive(Debug, Clone, Deserialize)]
pub struct Trend {
    pub name: String,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub tweet_volume: Option<u64>,
}

/// Location reference inside a trends result.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendLocationRef {
    pub name: String,
    pub woeid: u64,
}

/// One element of the `/trends/closest.json` response array.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendLocation {
    pub name: String,
    pub woeid: u64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, rename = "countryCode")]
    pub country_code: Option<String>,
    #[serde(default, rename = "placeType")]
    pub place_type: Option<PlaceType>,
}

/// Place classification of a trend location.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceType {
    pub name: String,
    #[serde(default)]
    pub code: Option<i64>,
}

/// Extract the first provider error message from a parsed body, if any.
///
/// Successful calls can still carry a domain-level `errors` field (for
/// example an unknown WOEID); callers inspect for it with this helper.
pub fn error_message(body: &Value) -> Option<&str> {
    body.get("errors")?
        .get(0)?
        .get("message")
        .and_then(Value::as_str)
}
