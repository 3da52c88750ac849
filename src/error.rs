//! Custom error types for the StudyFlow engine.
//!
//! This module provides structured error types that enable better
//! error handling, reporting, and recovery throughout the engine.
//! Nothing in this taxonomy is fatal: every failure degrades to
//! "state unchanged, the next user interaction retries".

use thiserror::Error;

/// Main error type for StudyFlow operations
#[derive(Error, Debug)]
pub enum StudyflowError {
    // =========================================================================
    // Authentication Errors
    // =========================================================================
    /// Invalid credentials or token; the session resets to logged-out
    #[error("Authentication error: {message}")]
    Auth { message: String },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// Malformed input value; the affected record is left unmodified
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfig { field: String, reason: String },

    // =========================================================================
    // Backend Errors
    // =========================================================================
    /// Transient save/fetch failure; the next change retries
    #[error("Backend error: {message}")]
    Backend { message: String },

    // =========================================================================
    // Permission Errors
    // =========================================================================
    /// Notification or audio permission denied; swallowed after logging
    #[error("Permission error: {message}")]
    Permission { message: String },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StudyflowError {
    // =========================================================================
    // Constructor helpers
    // =========================================================================

    /// Create an authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Create a permission error
    pub fn permission(message: impl Into<String>) -> Self {
        Self::Permission {
            message: message.into(),
        }
    }

    // =========================================================================
    // Classification helpers
    // =========================================================================

    /// Check if this error is transient (retried by the next change)
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Backend { .. } | Self::Io(_))
    }

    /// Check if this error requires the session to reset to logged-out
    pub fn resets_session(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Check if this error can be swallowed after logging
    pub fn is_ignorable(&self) -> bool {
        matches!(self, Self::Permission { .. })
    }
}

/// Type alias for StudyFlow results
pub type Result<T> = std::result::Result<T, StudyflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StudyflowError::validation("time", "expected H:MM AM/PM");
        assert!(err.to_string().contains("time"));
        assert!(err.to_string().contains("H:MM AM/PM"));
    }

    #[test]
    fn test_is_transient() {
        assert!(StudyflowError::backend("connection refused").is_transient());
        assert!(!StudyflowError::auth("bad token").is_transient());
        assert!(!StudyflowError::permission("denied").is_transient());
    }

    #[test]
    fn test_resets_session() {
        assert!(StudyflowError::auth("invalid token").resets_session());
        assert!(!StudyflowError::backend("timeout").resets_session());
    }

    #[test]
    fn test_is_ignorable() {
        assert!(StudyflowError::permission("notifications blocked").is_ignorable());
        assert!(!StudyflowError::auth("expired").is_ignorable());
        assert!(!StudyflowError::validation("day", "unknown label").is_ignorable());
    }

    #[test]
    fn test_constructor_helpers() {
        let err = StudyflowError::validation("dueDate", "not a date");
        if let StudyflowError::Validation { field, reason } = err {
            assert_eq!(field, "dueDate");
            assert_eq!(reason, "not a date");
        } else {
            panic!("Wrong error variant");
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: StudyflowError = io_err.into();
        assert!(matches!(err, StudyflowError::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json {{{").unwrap_err();
        let err: StudyflowError = json_err.into();
        assert!(matches!(err, StudyflowError::Json(_)));
    }
}
