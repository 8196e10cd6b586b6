//! Error types for the demo model

/// Prediction and training errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Input held no samples
    #[error("input must be a non-empty list")]
    EmptyInput,

    /// Sample width differs from the weight vector
    #[error("expected {expected} features, got {actual}")]
    FeatureMismatch {
        /// Weight count
        expected: usize,
        /// Feature count supplied
        actual: usize,
    },

    /// Training samples and targets differ in length
    #[error("got {samples} samples but {targets} targets")]
    TargetMismatch {
        /// Number of feature rows
        samples: usize,
        /// Number of targets
        targets: usize,
    },
}

/// Result alias for the demo model
pub type Result<T> = std::result::Result<T, ModelError>;
