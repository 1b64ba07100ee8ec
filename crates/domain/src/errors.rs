//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Stop id is empty or cannot round-trip through a query
    #[error("Invalid stop id: {0}")]
    InvalidStopId(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}
