//! Configuration structures and loading logic.

use crate::api::auth::Credentials;
use crate::api::DEFAULT_API_BASE;
use crate::config::modes::RunMode;
use crate::download::DEFAULT_CONCURRENT_DOWNLOADS;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub credentials: CredentialsConfig,

    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// API credentials configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Application API key (consumer key).
    pub api_key: String,

    /// Application API secret (consumer secret).
    pub api_secret: String,
}

/// Timeline targeting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Screen name whose timeline is fetched.
    #[serde(default)]
    pub screen_name: Option<String>,

    /// Number of tweets to request per fetch.
    #[serde(default)]
    pub count: Option<u32>,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Run mode (timeline, media, trends).
    #[serde(default)]
    pub mode: RunMode,

    /// Base directory for downloaded media.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Bound on concurrently processed tweets.
    #[serde(default = "default_concurrent_downloads")]
    pub concurrent_downloads: usize,

    /// Whether retweets are included in timeline fetches.
    #[serde(default = "default_true")]
    pub include_retweets: bool,

    /// API base URL, overridable for testing against a local server.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_downloads: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::default(),
            download_directory: None,
            concurrent_downloads: default_concurrent_downloads(),
            include_retweets: true,
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            show_downloads: true,
        }
    }
}

fn default_concurrent_downloads() -> usize {
    DEFAULT_CONCURRENT_DOWNLOADS
}

fn default_api_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_user_agent() -> String {
    format!("twitter-downloader/{}", env!("CARGO_PKG_VERSION"))
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// API credentials in the form the token store takes.
    pub fn api_credentials(&self) -> Credentials {
        Credentials::new(
            self.credentials.api_key.clone(),
            self.credentials.api_secret.clone(),
        )
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_minimal_config_applies_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "[credentials]\napi_key = \"k\"\napi_secret = \"s\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.credentials.api_key, "k");
        assert_eq!(config.options.concurrent_downloads, 4);
        assert!(config.options.include_retweets);
        assert_eq!(config.options.api_url, "https://api.twitter.com");
        assert!(config.target.screen_name.is_none());
    }

    #[test]
    fn test_load_missing_file_names_example() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        match err {
            Error::Config(message) => assert!(message.contains("config.example.toml")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let mut config = Config {
            credentials: CredentialsConfig {
                api_key: "key".to_string(),
                api_secret: "secret".to_string(),
            },
            target: TargetConfig::default(),
            options: OptionsConfig::default(),
        };
        config.target.screen_name = Some("rustlang".to_string());
        config.options.concurrent_downloads = 2;

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded.target.screen_name.as_deref(), Some("rustlang"));
        assert_eq!(loaded.options.concurrent_downloads, 2);
    }
}
