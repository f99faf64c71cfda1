//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, RunMode};

/// Twitter timeline, trends and media CLI.
#[derive(Parser, Debug)]
#[command(
    name = "twitter-downloader",
    version,
    about = "Fetch tweets, trends and media through the Twitter v1.1 API",
    long_about = "A CLI tool for the Twitter v1.1 API using app-only authentication.\n\n\
                  Prints user timelines, downloads attached media, and lists trending topics."
)]
pub struct Args {
    /// Screen name of the user to fetch.
    #[arg(short, long)]
    pub user: Option<String>,

    /// Base directory for downloaded media.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Application API key (consumer key).
    #[arg(short = 'k', long = "key", env = "TWITTER_API_KEY")]
    pub api_key: Option<String>,

    /// Application API secret (consumer secret).
    #[arg(short = 's', long = "secret", env = "TWITTER_API_SECRET")]
    pub api_secret: Option<String>,

    /// Run mode.
    #[arg(long, value_enum)]
    pub mode: Option<RunModeArg>,

    /// Number of tweets to request.
    #[arg(long)]
    pub count: Option<u32>,

    /// Bound on concurrently processed tweets in media mode.
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// WOEID of the trends location (1 = worldwide).
    #[arg(long)]
    pub woeid: Option<u64>,

    /// Place name to resolve into a trends location.
    #[arg(long, conflicts_with = "woeid")]
    pub place: Option<String>,

    /// Latitude of the trends location.
    #[arg(long, requires = "long", conflicts_with_all = ["woeid", "place"])]
    pub lat: Option<f64>,

    /// Longitude of the trends location.
    #[arg(long, requires = "lat")]
    pub long: Option<f64>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Write the merged configuration back to the configuration file.
    #[arg(long)]
    pub save_config: bool,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Invalidate the access token after the run.
    #[arg(long)]
    pub invalidate: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI run mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RunModeArg {
    /// Print the user's timeline.
    Timeline,
    /// Download the media attached to the user's timeline.
    Media,
    /// Print trending topics for a location.
    Trends,
}

impl From<RunModeArg> for RunMode {
    fn from(arg: RunModeArg) -> Self {
        match arg {
            RunModeArg::Timeline => RunMode::Timeline,
            RunModeArg::Media => RunMode::Media,
            RunModeArg::Trends => RunMode::Trends,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(user) = &self.user {
            config.target.screen_name = Some(user.clone());
        }

        if let Some(key) = &self.api_key {
            config.credentials.api_key = key.clone();
        }

        if let Some(secret) = &self.api_secret {
            config.credentials.api_secret = secret.clone();
        }

        if let Some(dir) = &self.download_directory {
            config.options.download_directory = Some(dir.clone());
        }

        if let Some(mode) = self.mode {
            config.options.mode = mode.into();
        }

        if let Some(count) = self.count {
            config.target.count = Some(count);
        }

        if let Some(concurrency) = self.concurrency {
            config.options.concurrent_downloads = concurrency;
        }

        // Boolean flags (only override if set to non-default)
        if self.quiet {
            config.options.show_downloads = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            credentials: Default::default(),
            target: Default::default(),
            options: Default::default(),
        }
    }

    #[test]
    fn test_merge_into_config_overrides() {
        let args = Args::try_parse_from([
            "twitter-downloader",
            "--user",
            "rustlang",
            "--count",
            "5",
            "--quiet",
        ])
        .unwrap();

        let mut config = base_config();
        args.merge_into_config(&mut config);

        assert_eq!(config.target.screen_name.as_deref(), Some("rustlang"));
        assert_eq!(config.target.count, Some(5));
        assert!(!config.options.show_downloads);
    }

    #[test]
    fn test_save_config_flag_persists_merged_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let args = Args::try_parse_from([
            "twitter-downloader",
            "--user",
            "rustlang",
            "--concurrency",
            "2",
            "--save-config",
        ])
        .unwrap();
        assert!(args.save_config);

        let mut config = base_config();
        args.merge_into_config(&mut config);
        config.save(&path).unwrap();

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.target.screen_name.as_deref(), Some("rustlang"));
        assert_eq!(reloaded.options.concurrent_downloads, 2);
    }
}
