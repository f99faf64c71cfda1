//! Configuration validation logic.

use crate::config::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Maximum screen name length.
const MAX_SCREEN_NAME_LENGTH: usize = 15;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_credential("api_key", &config.credentials.api_key)?;
    validate_credential("api_secret", &config.credentials.api_secret)?;
    validate_api_url(&config.options.api_url)?;

    if let Some(screen_name) = &config.target.screen_name {
        validate_screen_name(screen_name)?;
    }

    Ok(())
}

/// Validate one credential half (key or secret).
pub fn validate_credential(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MissingConfig(field.to_string()));
    }

    // Check for placeholder values
    let lower = value.to_lowercase();
    if lower.contains("replaceme") || lower.contains("your_api") {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "{} appears to be a placeholder. Please provide your application's credentials.",
                field
            ),
        });
    }

    Ok(())
}

/// Validate the API base URL.
pub fn validate_api_url(api_url: &str) -> Result<()> {
    Url::parse(api_url).map_err(|e| Error::ConfigValidation {
        field: "api_url".to_string(),
        message: format!("Invalid API URL '{}': {}", api_url, e),
    })?;
    Ok(())
}

/// Validate a screen name.
pub fn validate_screen_name(screen_name: &str) -> Result<()> {
    let clean = normalize_screen_name(screen_name);

    if clean.is_empty() {
        return Err(Error::MissingConfig("screen_name".to_string()));
    }

    if clean.len() > MAX_SCREEN_NAME_LENGTH {
        return Err(Error::ConfigValidation {
            field: "screen_name".to_string(),
            message: format!(
                "Screen name '{}' is too long (maximum {} characters)",
                screen_name, MAX_SCREEN_NAME_LENGTH
            ),
        });
    }

    // Screen name pattern: word characters only
    let pattern = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
    if !pattern.is_match(clean) {
        return Err(Error::ConfigValidation {
            field: "screen_name".to_string(),
            message: format!(
                "Screen name '{}' contains invalid characters. Only letters, digits and underscores allowed.",
                screen_name
            ),
        });
    }

    // Check for placeholder values
    let lower = clean.to_lowercase();
    if lower == "replaceme" || lower == "username" || lower == "screen_name" {
        return Err(Error::ConfigValidation {
            field: "screen_name".to_string(),
            message: format!(
                "Screen name '{}' appears to be a placeholder. Please provide an actual user.",
                screen_name
            ),
        });
    }

    Ok(())
}

/// Strip whitespace and a leading `@` from a screen name.
pub fn normalize_screen_name(input: &str) -> &str {
    input.trim().trim_start_matches('@')
}
