//! Transit error types

use thiserror::Error;

/// Errors that can occur during transit operations
#[derive(Debug, Error)]
pub enum TransitError {
    /// Connection to the transit service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// HTTP request failed without a readable API response
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The API answered with a non-success status
    #[error("{0}")]
    Api(String),

    /// The requested stop does not exist
    #[error("Stop not found: {0}")]
    NotFound(String),

    /// Failed to parse response from transit service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl TransitError {
    /// Returns true if the failure happened below the API layer
    /// (network, timeout, unreadable HTTP response)
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout { .. } | Self::RequestFailed(_)
        )
    }
}
