//! Error types for the portfolio core

use thiserror::Error;

/// Errors raised while loading content or wiring the page.
///
/// None of these reach the visitor: content errors fall back to the
/// built-in posts and element errors disable a single interaction channel.
#[derive(Error, Debug)]
pub enum FolioError {
    /// The posts request could not be made or completed
    #[error("Network error: {0}")]
    Network(String),

    /// The posts endpoint answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    /// The posts body was not the expected JSON shape
    #[error("Malformed posts document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A markdown post without a usable front-matter block
    #[error("Invalid front matter: {0}")]
    FrontMatter(String),

    /// An element an adapter needs is not on the page
    #[error("Missing page element: {0}")]
    MissingElement(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::HttpStatus(404);
        assert_eq!(format!("{}", err), "Unexpected HTTP status: 404");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Malformed(_)));
    }
}
