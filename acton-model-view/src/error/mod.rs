//! Error types and error handling

use thiserror::Error;

/// Framework error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelViewError {
    /// A model was declared without labels of its own and inherited none
    #[error("labels are not declared for '{model}' and none are inherited")]
    MissingLabels {
        /// Name of the model being declared
        model: String,
    },

    /// Label lookup miss
    #[error("label not found: {0}")]
    KeyNotFound(String),

    /// Caller passed a malformed argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No context registered under the requested key
    #[error("context not found: {0}")]
    ContextNotFound(String),

    /// A model instance does not expose a labeled attribute
    #[error("model has no field '{key}'")]
    MissingField {
        /// Attribute key that was requested
        key: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ModelViewError {
    /// Whether a render may continue after this error
    ///
    /// Only lookup misses are recoverable; the caller decides between a
    /// fallback value and propagating.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::KeyNotFound(_))
    }
}

/// Result alias used across the crate
pub type Result<T, E = ModelViewError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_labels_message() {
        let err = ModelViewError::MissingLabels {
            model: "Person".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "labels are not declared for 'Person' and none are inherited"
        );
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_key_not_found_is_recoverable() {
        let err = ModelViewError::KeyNotFound("email".to_string());
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "label not found: email");
    }
}
