//! Twitter Downloader - timelines, trends and media over app-only auth.
//!
//! This library provides a typed client for the Twitter v1.1 API using the
//! application-only OAuth2 flow.
//!
//! # Features
//!
//! - Memoized bearer token acquisition and invalidation
//! - Authenticated JSON requests with empty-body detection
//! - Concurrent download of timeline media
//! - Trend lookups by WOEID, place name or coordinates
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use twitter_downloader::{Config, TwitterApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = TwitterApi::new(
//!         config.api_credentials(),
//!         &config.options.user_agent,
//!         &config.options.api_url,
//!     )?;
//!
//!     let tweets = api.user_timeline("rustlang", Some(5), &[]).await?;
//!     for tweet in &tweets {
//!         println!("{}", tweet.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod geo;
pub mod output;

// Re-exports for convenience
pub use api::{Credentials, TokenStore, TwitterApi};
pub use config::{Config, RunMode};
pub use download::{download_tweet_media, DEFAULT_CONCURRENT_DOWNLOADS};
pub use error::{Error, Result};
pub use geo::{FixedLocationResolver, LocationResolver};
