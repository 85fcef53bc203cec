use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed error returned by caller-supplied parsers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used throughout dirdoc.
pub type Result<T> = std::result::Result<T, DirdocError>;

#[derive(Error, Debug)]
pub enum DirdocError {
    // Traversal
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("IO error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Content
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    // Config
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid source: {0}")]
    InvalidSource(String),
}

impl DirdocError {
    /// Classify an `io::Error` raised while touching `path`.
    ///
    /// Not-found and permission failures get their own variants so callers can
    /// report them without digging into the source error.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound         => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _                                    => Self::Io { path, source: err },
        }
    }

    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PermissionDenied(p)
            | Self::NotFound(p)
            | Self::NotADirectory(p)
            | Self::Io { path: p, .. }
            | Self::Parse { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Whether this error came from the filesystem (listing or reading)
    /// rather than from a parser or from schema construction.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied(_) | Self::NotFound(_) | Self::NotADirectory(_) | Self::Io { .. }
        )
    }
}
