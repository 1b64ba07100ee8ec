//! Public transit service port
//!
//! Defines the interface the launcher uses to reach stop and departure data.
//! Adapters in the infrastructure layer implement this port using transit APIs.

use async_trait::async_trait;
use domain::{Departure, Stop, StopId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for stop and departure lookups
///
/// Failures are reported as [`ApplicationError::Api`] (the remote service
/// said no), [`ApplicationError::Transport`] (the request never completed),
/// or [`ApplicationError::Domain`] with `NotFound` for unknown stop ids.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransitPort: Send + Sync {
    /// Stops matching a free-text term, already in relevance order
    async fn stops(&self, term: &str) -> Result<Vec<Stop>, ApplicationError>;

    /// Resolve a single stop
    async fn stop(&self, id: &StopId) -> Result<Stop, ApplicationError>;

    /// Upcoming departures for a stop, in service order
    async fn departures(&self, id: &StopId) -> Result<Vec<Departure>, ApplicationError>;

    /// Point subsequent requests at a different API base URL
    fn set_endpoint(&self, base_url: &str) -> Result<(), ApplicationError>;
}
