//! Error types for the route-path builder.
//!
//! This module uses an opaque `Error` struct paired with an `ErrorKind` enum,
//! following the `std::io::Error` pattern. Internal error sources can change
//! without breaking consumers.
//!
//! # Example
//!
//! ```rust
//! use route_conf::{Error, ErrorKind};
//!
//! let error = Error::segment("parameter `id` was not supplied");
//!
//! match error.kind() {
//!     ErrorKind::SegmentEvaluation => println!("render failed: {}", error),
//!     ErrorKind::Configuration => println!("bad route table: {}", error),
//!     _ => println!("other error: {}", error),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
///
/// Use [`Error::kind()`] to get the kind of an error.
///
/// # Stability
///
/// This enum is marked `#[non_exhaustive]`, so new variants may be added
/// without breaking existing code. Always include a wildcard arm when
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A fragment renderer failed while rendering its path fragment,
    /// either during tree construction or during a `get` call.
    #[error("segment evaluation error")]
    SegmentEvaluation,

    /// Invalid declarative route table (bad TOML, empty path template,
    /// unreadable file).
    #[error("configuration error")]
    Configuration,
}

/// An error that can occur while building a route tree or rendering a path.
///
/// This is an opaque error type wrapping an underlying source. Use
/// [`Error::kind()`] to categorize it for matching, and the `Display`
/// implementation for a human-readable message.
///
/// # Creating Errors
///
/// ```rust
/// use route_conf::Error;
///
/// let err = Error::segment("renderer returned no value for `categoryId`");
/// let err = Error::config("route `shop.category` has an empty path template");
/// ```
pub struct Error {
    kind: ErrorKind,
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl Error {
    /// Creates a new error with the given kind and source.
    pub fn new<E>(kind: ErrorKind, error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self {
            kind,
            source: error.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error code string for this error.
    ///
    /// This is a stable identifier suitable for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self.kind {
            ErrorKind::SegmentEvaluation => "SEGMENT_EVALUATION_ERROR",
            ErrorKind::Configuration => "CONFIG_ERROR",
        }
    }

    /// Consumes the error and returns the inner error source.
    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self.source
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl Error {
    /// Creates a segment evaluation error.
    pub fn segment(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::SegmentEvaluation, msg.into())
    }

    /// Creates a segment evaluation error for a parameter the renderer
    /// required but the merged arguments did not contain.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::SegmentEvaluation,
            format!("missing required parameter `{}`", name.into()),
        )
    }

    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, msg.into())
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::new(ErrorKind::Configuration, err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Configuration, err)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(
            format!("{}", ErrorKind::SegmentEvaluation),
            "segment evaluation error"
        );
        assert_eq!(format!("{}", ErrorKind::Configuration), "configuration error");
    }

    #[test]
    fn test_error_new() {
        let err = Error::new(ErrorKind::Configuration, "test error");
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(format!("{}", err), "test error");
    }

    #[test]
    fn test_error_segment() {
        let err = Error::segment("render failed");
        assert_eq!(err.kind(), ErrorKind::SegmentEvaluation);
        assert!(err.to_string().contains("render failed"));
    }

    #[test]
    fn test_error_missing_parameter() {
        let err = Error::missing_parameter("categoryId");
        assert_eq!(err.kind(), ErrorKind::SegmentEvaluation);
        assert!(err.to_string().contains("categoryId"));
        assert!(err.to_string().contains("missing required parameter"));
    }

    #[test]
    fn test_error_config() {
        let err = Error::config("bad table");
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("bad table"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::segment("x").error_code(), "SEGMENT_EVALUATION_ERROR");
        assert_eq!(Error::config("x").error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = "not valid ][ toml".parse::<toml::Value>().unwrap_err();
        let err: Error = toml_err.into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: Error = io_err.into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_error_debug() {
        let err = Error::segment("test");
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("SegmentEvaluation"));
    }

    #[test]
    fn test_error_into_inner() {
        let err = Error::config("test message");
        let inner = err.into_inner();
        assert_eq!(format!("{}", inner), "test message");
    }

    #[test]
    fn test_error_source_trait() {
        let err = Error::segment("test");
        assert!(StdError::source(&err).is_some());
    }
}
