//! Error types for the fxml core.

/// Configuration error type for fxml.
#[derive(Debug, thiserror::Error)]
pub enum FxmlError {
    /// A serialization policy was registered twice for the same entity type.
    #[error("serialization policy already registered for type: {0}")]
    DuplicatePolicy(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for fxml configuration operations.
pub type FxmlResult<T> = Result<T, FxmlError>;
