//! Unified error type for Veldra operations
//!
//! A single flat enum covers the whole workspace; subsystems that need a
//! distinguished failure (such as [`crate::lock::LockTimeout`]) define their
//! own type and convert at the boundary.

use serde::{Deserialize, Serialize};

/// Unified error type for all Veldra operations
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum VeldraError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Description of the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Description of what was not found
        message: String,
    },

    /// Permission denied
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// Description of the permission issue
        message: String,
    },

    /// A command handler reported a failure
    #[error("Handler error: {message}")]
    Handler {
        /// Description of the handler failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl VeldraError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// Create a handler failure error
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Standard Result type for Veldra operations
pub type Result<T> = std::result::Result<T, VeldraError>;

impl From<std::io::Error> for VeldraError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(err.to_string()),
            _ => Self::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = VeldraError::handler("boom");
        assert!(matches!(err, VeldraError::Handler { .. }));
        assert_eq!(err.to_string(), "Handler error: boom");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing config");
        let err = VeldraError::from(io_err);
        assert!(matches!(err, VeldraError::NotFound { .. }));
    }
}
