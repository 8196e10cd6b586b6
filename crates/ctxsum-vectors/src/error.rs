//! Error types for vector generation
//!
//! Input anomalies never reach this module; the summarizer absorbs them.
//! Everything here is fatal to a generation run.

use std::path::PathBuf;

use crate::digest::DigestError;

/// Main vector generation error type
#[derive(Debug, thiserror::Error)]
pub enum VectorError {
    /// Environment variable held an unusable value
    #[error("invalid configuration: {var}={value:?}: {reason}")]
    Config {
        /// Variable name
        var: &'static str,
        /// Raw value as read
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Filesystem failure while reading or writing a manifest
    #[error("i/o error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Manifest could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Digest could not be computed
    #[error("digest error: {0}")]
    Digest(#[from] DigestError),

    /// Temporary file could not replace the destination
    #[error("failed to persist manifest to {}: {source}", path.display())]
    Persist {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl VectorError {
    /// Attach a path to an I/O error
    #[inline]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for vector generation
pub type Result<T> = std::result::Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display_names_variable() {
        let err = VectorError::Config {
            var: "CTXSUM_SEED",
            value: "abc".into(),
            reason: "invalid digit found in string".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("CTXSUM_SEED"));
        assert!(msg.contains("\"abc\""));
        assert!(matches!(err, VectorError::Config { .. }));
    }

    #[test]
    fn io_error_display_includes_path() {
        let err = VectorError::io(
            "/nope/test_vectors.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/nope/test_vectors.json"));
        assert!(matches!(err, VectorError::Io { .. }));
    }
}
