//! Run mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available run modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Print the targeted user's timeline (default).
    #[default]
    Timeline,
    /// Download the media attached to the user's timeline.
    Media,
    /// Print trending topics for a location.
    Trends,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Timeline => write!(f, "timeline"),
            RunMode::Media => write!(f, "media"),
            RunMode::Trends => write!(f, "trends"),
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "timeline" => Ok(RunMode::Timeline),
            "media" => Ok(RunMode::Media),
            "trends" => Ok(RunMode::Trends),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_through_str() {
        for mode in [RunMode::Timeline, RunMode::Media, RunMode::Trends] {
            assert_eq!(mode.to_string().parse::<RunMode>().unwrap(), mode);
        }
        assert!("bogus".parse::<RunMode>().is_err());
    }
}
