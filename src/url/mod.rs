//! URL handling module for driftnet
//!
//! This module provides absolute-URL parsing for seed validation and
//! path-derived MIME classification for the content-selection rule.

use crate::{UrlError, UrlResult};
use url::Url;

/// Parses a string as an absolute URL
///
/// # Arguments
///
/// * `input` - The URL string to parse
///
/// # Returns
///
/// * `Ok(Url)` - Successfully parsed absolute URL
/// * `Err(UrlError)` - The string is relative or malformed
pub fn parse_absolute(input: &str) -> UrlResult<Url> {
    Url::parse(input).map_err(|e| UrlError::Parse(format!("'{}': {}", input, e)))
}

/// Classifies an address by the MIME type derived from its path component
///
/// When the path's guessed MIME type is `image/*` or `text/*`, returns the
/// base file name of the path; the caller stores that name instead of
/// extracted page text. Paths without a guessable extension return `None`.
///
/// Note that `text/html` paths (e.g. `/about.html`) classify as media here
/// and get the file-name treatment; only extensionless addresses fall
/// through to text extraction.
///
/// # Arguments
///
/// * `url` - The address to classify
///
/// # Returns
///
/// * `Some(String)` - Base file name, for image/* and text/* paths
/// * `None` - Path does not classify as media
pub fn media_file_name(url: &Url) -> Option<String> {
    let mime = mime_guess::from_path(url.path()).first()?;

    if mime.type_() == mime_guess::mime::IMAGE || mime.type_() == mime_guess::mime::TEXT {
        let name = url.path().rsplit('/').next().unwrap_or_default();
        Some(name.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_valid() {
        let url = parse_absolute("https://example.com/page").unwrap();
        assert_eq!(url.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_parse_absolute_rejects_relative() {
        let result = parse_absolute("/just/a/path");
        assert!(result.is_err());
    }

    #[test]
    fn test_media_file_name_image() {
        let url = Url::parse("https://example.com/assets/logo.png").unwrap();
        assert_eq!(media_file_name(&url), Some("logo.png".to_string()));
    }

    #[test]
    fn test_media_file_name_text() {
        let url = Url::parse("https://example.com/readme.txt").unwrap();
        assert_eq!(media_file_name(&url), Some("readme.txt".to_string()));
    }

    #[test]
    fn test_media_file_name_html_counts_as_text() {
        let url = Url::parse("https://example.com/docs/about.html").unwrap();
        assert_eq!(media_file_name(&url), Some("about.html".to_string()));
    }

    #[test]
    fn test_media_file_name_no_extension() {
        let url = Url::parse("https://example.com/docs/about").unwrap();
        assert_eq!(media_file_name(&url), None);
    }

    #[test]
    fn test_media_file_name_root_path() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(media_file_name(&url), None);
    }

    #[test]
    fn test_media_file_name_non_media_extension() {
        let url = Url::parse("https://example.com/report.pdf").unwrap();
        assert_eq!(media_file_name(&url), None);
    }

    #[test]
    fn test_media_file_name_ignores_query() {
        let url = Url::parse("https://example.com/photo.jpg?size=large").unwrap();
        assert_eq!(media_file_name(&url), Some("photo.jpg".to_string()));
    }
}
