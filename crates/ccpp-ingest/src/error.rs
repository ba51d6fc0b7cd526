//! Error types for metadata ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or reading metadata files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Location is neither a file nor a directory.
    #[error("the metafile location '{path}' is neither a file nor a directory")]
    PathNotFound { path: PathBuf },

    /// Failed to read or decode a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::PathNotFound {
            path: PathBuf::from("/no/such/place"),
        };
        assert_eq!(
            err.to_string(),
            "the metafile location '/no/such/place' is neither a file nor a directory"
        );
    }
}
