//! Error handling module for Secret Santa
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Submission failures have their own type in [`crate::submission::SubmitError`]
//! because they are recovered locally and shown to the user. Configuration
//! files are tooling-level and report through `anyhow`.

use thiserror::Error;

/// Main error type for the Secret Santa app
#[derive(Error, Debug)]
pub enum SantaError {
    /// IO errors (terminal input, drawing)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A component was constructed with settings it cannot work with,
    /// such as a selector wheel with no candidates
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type alias for Secret Santa operations
pub type Result<T> = std::result::Result<T, SantaError>;

impl SantaError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SantaError::invalid_configuration("candidate list is empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: candidate list is empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SantaError = io_err.into();
        assert!(matches!(err, SantaError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
