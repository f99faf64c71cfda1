//! Filename generation and manipulation.

use url::Url;

use crate::error::{Error, Result};

/// Derive a local filename from a media URL.
///
/// The name is the last path segment of the URL, query string excluded,
/// sanitized for the local filesystem.
pub fn media_file_name(media_url: &str) -> Result<String> {
    let url = Url::parse(media_url)?;

    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| {
            Error::InvalidFilename(format!("URL has no file component: '{}'", media_url))
        })?;

    sanitize_filename(segment)
}

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns an error if the filename contains path traversal patterns.
pub fn sanitize_filename(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    // Sanitize remaining problematic characters
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_file_name_last_segment() {
        assert_eq!(
            media_file_name("http://pbs.twimg.com/media/img1.jpg").unwrap(),
            "img1.jpg"
        );
        assert_eq!(
            media_file_name("https://pbs.twimg.com/a/b/c/photo.png").unwrap(),
            "photo.png"
        );
    }

    #[test]
    fn test_media_file_name_ignores_query() {
        assert_eq!(
            media_file_name("https://pbs.twimg.com/media/img1.jpg?format=jpg&name=large").unwrap(),
            "img1.jpg"
        );
    }

    #[test]
    fn test_media_file_name_no_file_component() {
        assert!(media_file_name("https://pbs.twimg.com/").is_err());
        assert!(media_file_name("not a url").is_err());
    }

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("normal.jpg").unwrap(), "normal.jpg");
        assert_eq!(sanitize_filename("file:name.jpg").unwrap(), "file_name.jpg");
        assert_eq!(
            sanitize_filename("file*with?special.jpg").unwrap(),
            "file_with_special.jpg"
        );
    }

    #[test]
    fn test_sanitize_filename_path_traversal() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("..\\windows\\system32").is_err());
        assert!(sanitize_filename("foo/../bar").is_err());
    }

    #[test]
    fn test_sanitize_filename_null_bytes() {
        assert!(sanitize_filename("file\0name.jpg").is_err());
    }

    #[test]
    fn test_sanitize_filename_empty() {
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("   ").is_err());
    }
}
