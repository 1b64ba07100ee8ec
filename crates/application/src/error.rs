//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (includes stop not found)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The transit API reported a failure
    #[error("{0}")]
    Api(String),

    /// Network or transport failure reaching the transit API
    #[error("Network error: {0}")]
    Transport(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}
