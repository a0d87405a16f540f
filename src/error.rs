//! Error types for bytemap.
//!
//! Every failure aborts the run; nothing here is retried or recovered.

use std::path::PathBuf;

/// Errors that can occur while building a byte map.
#[derive(Debug, thiserror::Error)]
pub enum ByteMapError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern as supplied on the command line
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        /// File or directory the failure relates to
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode image: {0}")]
    Encoding(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ByteMapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ByteMapError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<glob::GlobError> for ByteMapError {
    fn from(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        ByteMapError::io(path, err.into())
    }
}

pub type Result<T> = std::result::Result<T, ByteMapError>;
