//! Stop identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Identifier of a transit stop
///
/// The upstream API mixes numeric and string ids, so the identifier is
/// always normalized to its string form. Two ids are equal when their
/// string forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop id from user or payload text
    ///
    /// Surrounding whitespace is stripped. Empty ids and ids containing
    /// inner whitespace are rejected, since they cannot round-trip through
    /// a query string.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidStopId("stop id must not be empty".to_string()));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidStopId(format!(
                "stop id must not contain whitespace: {trimmed}"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the string form of the id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for StopId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for StopId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for StopId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
