//! Typed error handling for circles.
//!
//! Only malformed inputs are errors. Graph shape (dead friend references,
//! unreachable people, empty circles, exhausted traversals) is never reported
//! through this type.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for circles operations.
#[derive(Error, Debug)]
pub enum CirclesError {
    /// A filter name that is not one of the known predicate variants
    #[error("Invalid filter type: '{name}' (expected any, male or female)")]
    InvalidFilterType { name: String },

    /// I/O error when reading a people file
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// People file is not a valid JSON array of people
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CirclesError {
    /// Create an invalid filter type error.
    pub fn invalid_filter(name: impl Into<String>) -> Self {
        Self::InvalidFilterType { name: name.into() }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a parse error.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Parse { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for circles results.
pub type CirclesResult<T> = Result<T, CirclesError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> CirclesResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> CirclesResult<T> {
        self.map_err(|e| CirclesError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = CirclesError::io(
            PathBuf::from("/data/people.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, CirclesError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/data/people.json")));
        assert!(err.to_string().contains("/data/people.json"));
    }

    #[test]
    fn test_invalid_filter_message() {
        let err = CirclesError::invalid_filter("robot");
        assert!(matches!(err, CirclesError::InvalidFilterType { .. }));
        assert!(err.to_string().contains("'robot'"));
        assert_eq!(err.path(), None);
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let mapped = result.with_path("/missing/people.json");
        assert!(matches!(mapped, Err(CirclesError::Io { .. })));
    }
}
