//! Twitter API HTTP client.

use reqwest::{header, Client, Response};
use serde_json::Value;

use crate::api::auth::{Credentials, TokenStore};
use crate::api::types::{self, TrendLocation, TrendsResult, Tweet};
use crate::error::{Error, Result};

/// Twitter API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.twitter.com";

/// WOEID of the worldwide trend location.
pub const WORLDWIDE_WOEID: u64 = 1;

/// Default number of tweets requested from the timeline endpoint.
pub const DEFAULT_TIMELINE_COUNT: u32 = 20;

/// Twitter API client with app-only authentication.
///
/// [`get_json`](Self::get_json) is the single request primitive; the
/// endpoint methods layered on it own the domain-level error inspection.
#[derive(Debug)]
pub struct TwitterApi {
    http: Client,
    base_url: String,
    token: TokenStore,
}

impl TwitterApi {
    /// Create an API client for the given credentials.
    pub fn new(credentials: Credentials, user_agent: &str, api_url: &str) -> Result<Self> {
        let store = TokenStore::new(credentials, api_url);
        Self::with_store(store, user_agent, api_url)
    }

    /// Create an API client around an existing token store.
    pub fn with_store(store: TokenStore, user_agent: &str, api_url: &str) -> Result<Self> {
        // Default headers ride on every request the client sends,
        // token-exchange POSTs included.
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/x-www-form-urlencoded;charset=UTF-8"),
        );

        let http = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: api_url.trim_end_matches('/').to_string(),
            token: store,
        })
    }

    /// The token store backing this client.
    pub fn token_store(&self) -> &TokenStore {
        &self.token
    }

    /// The shared HTTP client, for token operations driven by callers.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Make an authenticated GET against a v1.1 resource and decode the
    /// body as JSON.
    ///
    /// An empty or absent body is always a fault ([`Error::EmptyResponse`]),
    /// never "no results". A non-empty body is returned as-is, even when it
    /// carries a provider `errors` field; inspecting for domain errors is
    /// the caller's job.
    pub async fn get_json(&self, resource: &str, params: &[(&str, String)]) -> Result<Value> {
        let token = self.token.acquire(&self.http).await?;

        let url = format!("{}/1.1{}", self.base_url, resource);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .query(params)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Err(Error::EmptyResponse);
        }

        let body: Value = serde_json::from_str(&text)?;
        if is_empty_body(&body) {
            return Err(Error::EmptyResponse);
        }

        Ok(body)
    }

    /// Fetch a user's timeline, retweets included.
    ///
    /// `extra` pairs override the defaults key-by-key, so a caller can
    /// replace `count` or add parameters like `exclude_replies`.
    pub async fn user_timeline(
        &self,
        screen_name: &str,
        count: Option<u32>,
        extra: &[(&str, String)],
    ) -> Result<Vec<Tweet>> {
        let mut params: Vec<(&str, String)> = vec![
            ("screen_name", screen_name.to_string()),
            ("include_rts", "true".to_string()),
            (
                "count",
                count.unwrap_or(DEFAULT_TIMELINE_COUNT).to_string(),
            ),
        ];
        for (key, value) in extra {
            match params.iter_mut().find(|(k, _)| k == key) {
                Some(entry) => entry.1 = value.clone(),
                None => params.push((key, value.clone())),
            }
        }

        let body = match self
            .get_json("/statuses/user_timeline.json", &params)
            .await
        {
            Err(err @ Error::EmptyResponse) => {
                return Err(Error::no_tweets(screen_name, err));
            }
            other => other?,
        };

        serde_json::from_value(body).map_err(Error::from)
    }

    /// Fetch trends for a WOEID location.
    pub async fn trends_at(&self, woeid: u64) -> Result<Vec<TrendsResult>> {
        let params = [("id", woeid.to_string())];
        let body = self.get_json("/trends/place.json", &params).await?;

        if let Some(message) = types::error_message(&body) {
            return Err(Error::Api(format!(
                "No trends for WOEID {}: {}",
                woeid, message
            )));
        }

        serde_json::from_value(body).map_err(Error::from)
    }

    /// Fetch the trend locations closest to a coordinate.
    pub async fn closest_trend_location(&self, lat: f64, long: f64) -> Result<Vec<TrendLocation>> {
        let params = [("lat", lat.to_string()), ("long", long.to_string())];
        let body = self.get_json("/trends/closest.json", &params).await?;
        serde_json::from_value(body).map_err(Error::from)
    }

    /// Download a media file from a URL (unauthenticated).
    pub async fn fetch_media(&self, url: &str) -> Result<Response> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}

/// An object with no keys, an array with no elements, or a null body all
/// count as empty.
fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
