//! Error types for theme management and theme file loading.

use std::io;
use std::path::PathBuf;

/// Errors returned by [`ThemeManager`](crate::ThemeManager) operations.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The named theme is not registered.
    #[error("Theme \"{0}\" not found")]
    NotFound(String),

    /// The persistent store failed to read or write the saved choice.
    #[error("Theme storage failed: {0}")]
    Storage(#[from] io::Error),
}

impl ThemeError {
    /// Create a not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}

/// Errors that can occur while reading themes or manager configuration
/// from YAML or JSON.
#[derive(Debug, thiserror::Error)]
pub enum ThemeFileError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The content did not parse.
    #[error("Failed to parse {}: {message}", display_path(.path))]
    Parse {
        /// Source file, if the content came from disk.
        path: Option<PathBuf>,
        /// Message from the YAML or JSON parser.
        message: String,
    },

    /// The file extension is not one of the recognized theme formats.
    #[error("Unsupported theme file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "<inline>".to_string(),
    }
}

impl ThemeFileError {
    pub(crate) fn parse(path: Option<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ThemeError::not_found("neon");
        assert_eq!(err.to_string(), "Theme \"neon\" not found");
    }

    #[test]
    fn test_storage_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: ThemeError = io_err.into();
        assert!(matches!(err, ThemeError::Storage(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_parse_error_inline_display() {
        let err = ThemeFileError::parse(None, "bad indent");
        assert!(err.to_string().contains("<inline>"));
        assert!(err.to_string().contains("bad indent"));
    }

    #[test]
    fn test_parse_error_path_display() {
        let err = ThemeFileError::parse(Some(PathBuf::from("themes/neon.yaml")), "oops");
        assert!(err.to_string().contains("themes/neon.yaml"));
    }
}
