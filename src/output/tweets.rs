//! Terminal rendering of tweets and trends.

use chrono::DateTime;
use console::style;

use crate::api::{Trend, TrendsResult, Tweet};

/// Timestamp layout used by the v1.1 API, e.g. "Thu Apr 06 15:28:43 +0000 2017".
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Print fetched tweets in delivery order and return the id of the last one.
pub fn print_tweets(tweets: &[Tweet]) -> Option<u64> {
    for tweet in tweets {
        println!("{}", tweet.text);
        println!(
            "  {}",
            style(format!(
                "posted at {}",
                format_created_at(&tweet.created_at)
            ))
            .dim()
        );
    }
    tweets.last().map(|tweet| tweet.id)
}

/// Print trend results grouped by location.
pub fn print_trends(results: &[TrendsResult]) {
    for result in results {
        let place = result
            .locations
            .first()
            .map(|location| location.name.as_str())
            .unwrap_or("unknown location");
        println!("{}", style(format!("Trending in {}:", place)).bold());
        for trend in &result.trends {
            println!("  {}", format_trend(trend));
        }
    }
}

/// Render a tweet timestamp for humans, falling back to the raw value when
/// it does not parse.
pub fn format_created_at(created_at: &str) -> String {
    DateTime::parse_from_str(created_at, CREATED_AT_FORMAT)
        .map(|when| when.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}

fn format_trend(trend: &Trend) -> String {
    match trend.tweet_volume {
        Some(volume) => format!("{} ({} tweets)", trend.name, volume),
        None => trend.name.clone(),
    }
}
