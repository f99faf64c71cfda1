//! Error types for the twitter-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The API returned a syntactically empty or absent body. The v1.1
    /// endpoints never answer a successful call with an empty document, so
    /// this is always a fault, not "zero results".
    #[error("Empty response from API")]
    EmptyResponse,

    /// Timeline fetch found no tweets. Wraps the underlying empty-response
    /// fault so callers keep the original cause.
    #[error("No tweets found for '{screen_name}'")]
    NoTweets {
        screen_name: String,
        #[source]
        source: Box<Error>,
    },

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // File system errors
    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    // Geo lookup errors
    #[error("Location lookup failed: {0}")]
    Location(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an empty-response fault with the screen name that produced it.
    pub fn no_tweets(screen_name: &str, source: Error) -> Self {
        Error::NoTweets {
            screen_name: screen_name.to_string(),
            source: Box::new(source),
        }
    }
}

/// Process exit codes for the CLI.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
