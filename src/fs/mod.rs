//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename generation and manipulation

pub mod naming;
pub mod paths;

pub use naming::{media_file_name, sanitize_filename};
pub use paths::{ensure_dir, media_destination};
