//! Download module for tweet media.
//!
//! This module provides:
//! - Single media file downloading
//! - Concurrent per-tweet batch downloading

pub mod batch;
pub mod media;

pub use batch::{download_tweet_media, DEFAULT_CONCURRENT_DOWNLOADS};
pub use media::download_media_file;
