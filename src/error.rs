//! Error types for the multiply widget.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;

/// Errors that can occur while setting up or running the widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// There is no terminal to draw the widget into.
    #[error("Container not found: {reason}")]
    ContainerNotFound {
        /// Why no terminal could be used.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to install the log subscriber.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl WidgetError {
    /// Create a ContainerNotFound error.
    pub fn container_not_found(reason: impl Into<String>) -> Self {
        Self::ContainerNotFound {
            reason: reason.into(),
        }
    }
}

impl From<tracing::subscriber::SetGlobalDefaultError> for WidgetError {
    fn from(err: tracing::subscriber::SetGlobalDefaultError) -> Self {
        Self::Logging(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_not_found_message() {
        let err = WidgetError::container_not_found("stdout is not a terminal");
        assert_eq!(
            err.to_string(),
            "Container not found: stdout is not a terminal"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: WidgetError = io.into();
        assert!(matches!(err, WidgetError::Io(_)));
    }
}
