//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Tweet and trend rendering

pub mod console;
pub mod progress;
pub mod tweets;

pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use progress::{create_download_bar, create_spinner};
pub use tweets::{format_created_at, print_trends, print_tweets};
