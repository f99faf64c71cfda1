//! Twitter Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use twitter_downloader::{
    api::{Tweet, TwitterApi, WORLDWIDE_WOEID},
    cli::Args,
    config::{normalize_screen_name, validate_config, Config, RunMode},
    download::download_tweet_media,
    error::{exit_codes, Error, Result},
    geo::{FixedLocationResolver, LocationResolver},
    output::{
        create_spinner, print_banner, print_config_summary, print_error, print_info,
        print_success, print_trends, print_tweets, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Authentication(_)
                | Error::Api(_)
                | Error::EmptyResponse
                | Error::NoTweets { .. } => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::Download(_) | Error::InvalidFilename(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config {
            credentials: Default::default(),
            target: Default::default(),
            options: Default::default(),
        }
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Persist the merged configuration if requested
    if args.save_config {
        config.save(&config_path)?;
        print_info(&format!(
            "Configuration saved to {}",
            config_path.display()
        ));
    }

    let mode = config.options.mode;
    let screen_name = config
        .target
        .screen_name
        .as_deref()
        .map(normalize_screen_name);

    print_config_summary(
        screen_name,
        &mode.to_string(),
        &config.download_directory().display().to_string(),
    );

    // Initialize API client
    let api = TwitterApi::new(
        config.api_credentials(),
        &config.options.user_agent,
        &config.options.api_url,
    )?;

    match mode {
        RunMode::Timeline => {
            let tweets = fetch_timeline(&api, &config, screen_name).await?;
            if let Some(last_id) = print_tweets(&tweets) {
                tracing::debug!("Last tweet id: {}", last_id);
            }
        }
        RunMode::Media => {
            let tweets = fetch_timeline(&api, &config, screen_name).await?;
            let dest_dir = config.download_directory();
            let last_id = download_tweet_media(
                &api,
                &tweets,
                &dest_dir,
                config.options.concurrent_downloads,
                config.options.show_downloads,
            )
            .await?;
            print_success(&format!(
                "Media saved to {} (last tweet id {})",
                dest_dir.display(),
                last_id
            ));
        }
        RunMode::Trends => {
            let woeid = resolve_woeid(&api, &args).await?;
            let results = api.trends_at(woeid).await?;
            print_trends(&results);
        }
    }

    // Invalidate the token server-side if requested. The store keeps its
    // cached copy.
    if args.invalidate {
        api.token_store().invalidate(api.http()).await?;
        print_info("Access token invalidated");
    }

    Ok(())
}

/// Fetch the configured user's timeline.
async fn fetch_timeline(
    api: &TwitterApi,
    config: &Config,
    screen_name: Option<&str>,
) -> Result<Vec<Tweet>> {
    let screen_name =
        screen_name.ok_or_else(|| Error::MissingConfig("screen_name".to_string()))?;

    let mut extra: Vec<(&str, String)> = Vec::new();
    if !config.options.include_retweets {
        extra.push(("include_rts", "false".to_string()));
    }

    let spinner = create_spinner(&format!("Fetching timeline of @{}...", screen_name));
    let result = api
        .user_timeline(screen_name, config.target.count, &extra)
        .await;
    spinner.finish_and_clear();

    result
}

/// Determine the WOEID for trends mode from the CLI arguments.
async fn resolve_woeid(api: &TwitterApi, args: &Args) -> Result<u64> {
    if let Some(woeid) = args.woeid {
        return Ok(woeid);
    }

    let coords = match (&args.place, args.lat, args.long) {
        (Some(place), _, _) => {
            let resolver = FixedLocationResolver::new();
            Some(resolver.resolve(place).await?)
        }
        (None, Some(lat), Some(long)) => Some((lat, long)),
        _ => None,
    };

    let (lat, long) = match coords {
        Some(coords) => coords,
        None => return Ok(WORLDWIDE_WOEID),
    };

    let locations = api.closest_trend_location(lat, long).await?;
    let location = locations
        .first()
        .ok_or_else(|| Error::Api(format!("No trend location near ({}, {})", lat, long)))?;

    print_info(&format!(
        "Closest trend location: {} (WOEID {})",
        location.name, location.woeid
    ));

    Ok(location.woeid)
}
