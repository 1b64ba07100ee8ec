//! Transit adapter - Implements TransitPort using integration_transit

use application::error::ApplicationError;
use application::ports::TransitPort;
use async_trait::async_trait;
use domain::{Departure, DomainError, Stop, StopId};
use integration_transit::{ApiDeparture, ApiStop, DrtTransitClient, TransitClient, TransitError};
use tracing::{instrument, warn};

/// Adapter for the DRT stop/departure API
pub struct TransitAdapter {
    client: Box<dyn TransitClient>,
}

impl std::fmt::Debug for TransitAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitAdapter")
            .field("base_url", &self.client.base_url())
            .finish()
    }
}

impl TransitAdapter {
    /// Create a new transit adapter over the DRT client
    pub fn new(client: DrtTransitClient) -> Self {
        Self::with_client(Box::new(client))
    }

    /// Create an adapter over any transit client implementation
    pub fn with_client(client: Box<dyn TransitClient>) -> Self {
        Self { client }
    }

    /// Map an integration error onto the application error kinds
    fn map_error(error: TransitError) -> ApplicationError {
        match error {
            TransitError::NotFound(id) => DomainError::not_found("Stop", id).into(),
            TransitError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            TransitError::Api(msg) => ApplicationError::Api(msg),
            e if e.is_transport() => ApplicationError::Transport(e.to_string()),
            e => ApplicationError::Api(e.to_string()),
        }
    }

    /// Convert an API stop to the domain stop
    fn convert_stop(stop: ApiStop) -> Result<Stop, ApplicationError> {
        let id = StopId::parse(&stop.id)?;
        Ok(Stop::new(id, stop.name, stop.lat, stop.lon))
    }

    /// Convert an API departure to the domain departure
    fn convert_departure(departure: ApiDeparture) -> Departure {
        Departure {
            route_id: departure.route_id,
            destination: departure.destination,
            is_real_time: departure.is_real_time,
            time: departure.time,
            time_late: departure.time_late,
        }
    }
}

#[async_trait]
impl TransitPort for TransitAdapter {
    #[instrument(skip(self))]
    async fn stops(&self, term: &str) -> Result<Vec<Stop>, ApplicationError> {
        let stops = self.client.stops(term).await.map_err(Self::map_error)?;

        // Skip records whose id cannot round-trip through a query
        Ok(stops
            .into_iter()
            .filter_map(|stop| match Self::convert_stop(stop) {
                Ok(stop) => Some(stop),
                Err(e) => {
                    warn!(error = %e, "Skipping stop with unusable id");
                    None
                },
            })
            .collect())
    }

    #[instrument(skip(self), fields(stop_id = %id))]
    async fn stop(&self, id: &StopId) -> Result<Stop, ApplicationError> {
        let stop = self
            .client
            .stop(id.as_str())
            .await
            .map_err(Self::map_error)?;
        Self::convert_stop(stop)
    }

    #[instrument(skip(self), fields(stop_id = %id))]
    async fn departures(&self, id: &StopId) -> Result<Vec<Departure>, ApplicationError> {
        let departures = self
            .client
            .departures(id.as_str())
            .await
            .map_err(Self::map_error)?;
        Ok(departures.into_iter().map(Self::convert_departure).collect())
    }

    fn set_endpoint(&self, base_url: &str) -> Result<(), ApplicationError> {
        self.client.set_base_url(base_url).map_err(Self::map_error)
    }
}
