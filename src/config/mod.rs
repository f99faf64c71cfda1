//! Configuration module for the twitter-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Run mode definitions
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, CredentialsConfig, OptionsConfig, TargetConfig};
pub use modes::RunMode;
pub use validation::{normalize_screen_name, validate_config, validate_screen_name};
