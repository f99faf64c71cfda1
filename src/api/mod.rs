//! Twitter API module.
//!
//! This module provides:
//! - HTTP client for the Twitter v1.1 REST API
//! - App-only OAuth2 token acquisition and invalidation
//! - API response types

pub mod auth;
pub mod client;
pub mod types;

pub use auth::{Credentials, TokenStore};
pub use client::{TwitterApi, DEFAULT_API_BASE, DEFAULT_TIMELINE_COUNT, WORLDWIDE_WOEID};
pub use types::*;
