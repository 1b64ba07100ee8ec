//! DRT transit client
//!
//! Provides stop search, single-stop lookup, and live departures using the
//! `/v2` endpoints of the DRT API.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::{TransitConfig, validate_base_url};
use crate::error::TransitError;
use crate::models::{ApiDeparture, ApiStop, RawDeparture, RawEnvelope, RawStop};

/// Trait for transit service clients
#[async_trait]
pub trait TransitClient: Send + Sync {
    /// Search for stops matching a free-text term, in relevance order
    async fn stops(&self, query: &str) -> Result<Vec<ApiStop>, TransitError>;

    /// Look up a single stop by id
    async fn stop(&self, id: &str) -> Result<ApiStop, TransitError>;

    /// Upcoming departures for a stop, in the order the API returns them
    async fn departures(&self, id: &str) -> Result<Vec<ApiDeparture>, TransitError>;

    /// Replace the API base URL used by subsequent requests
    fn set_base_url(&self, base_url: &str) -> Result<(), TransitError>;

    /// Currently active API base URL
    fn base_url(&self) -> String;
}

/// Client for the DRT stop/departure API
#[derive(Debug)]
pub struct DrtTransitClient {
    client: Client,
    base_url: ArcSwap<Url>,
    timeout_secs: u64,
}

impl DrtTransitClient {
    /// Create a new DRT transit client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TransitConfig) -> Result<Self, TransitError> {
        config.validate().map_err(TransitError::ConfigurationError)?;
        let base_url =
            validate_base_url(&config.base_url).map_err(TransitError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TransitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: ArcSwap::new(Arc::new(base_url)),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Build `{base}/v2/<segments...>`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TransitError> {
        let mut url = Url::clone(&self.base_url.load());
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                TransitError::ConfigurationError("base_url cannot be a base".to_string())
            })?;
            path.pop_if_empty().push("v2");
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Perform a GET request and return the HTTP status with the body text
    async fn fetch(
        &self,
        url: Url,
        params: &[(&str, &str)],
    ) -> Result<(StatusCode, String), TransitError> {
        debug!(url = %url, "Requesting transit data");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransitError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else {
                    TransitError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransitError::ParseError(e.to_string()))?;

        Ok((status, body))
    }

    /// Unwrap the `{"status", "result"}` envelope into a typed result
    fn parse_envelope<T: DeserializeOwned>(
        status: StatusCode,
        body: &str,
    ) -> Result<T, TransitError> {
        let envelope: RawEnvelope = match serde_json::from_str(body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(TransitError::RequestFailed(format!("HTTP {status}")));
            },
            Err(e) => return Err(TransitError::ParseError(e.to_string())),
        };

        if envelope.status != "success" {
            let message = match envelope.result {
                serde_json::Value::String(message) => message,
                serde_json::Value::Null => format!("API returned status '{}'", envelope.status),
                other => other.to_string(),
            };
            warn!(status = %envelope.status, %message, "Transit API reported failure");
            return Err(TransitError::Api(message));
        }

        serde_json::from_value(envelope.result).map_err(|e| TransitError::ParseError(e.to_string()))
    }

    /// Parse a stop search response
    fn parse_stops_response(status: StatusCode, body: &str) -> Result<Vec<ApiStop>, TransitError> {
        let raw: Vec<RawStop> = Self::parse_envelope(status, body)?;
        Ok(raw.into_iter().map(ApiStop::from).collect())
    }

    /// Parse a single stop response; HTTP 404 and a null result mean not found
    fn parse_stop_response(id: &str, status: StatusCode, body: &str) -> Result<ApiStop, TransitError> {
        if status == StatusCode::NOT_FOUND {
            return Err(TransitError::NotFound(id.to_string()));
        }
        let raw: Option<RawStop> = Self::parse_envelope(status, body)?;
        raw.map(ApiStop::from)
            .ok_or_else(|| TransitError::NotFound(id.to_string()))
    }

    /// Parse a departures response
    fn parse_departures_response(
        status: StatusCode,
        body: &str,
    ) -> Result<Vec<ApiDeparture>, TransitError> {
        let raw: Vec<RawDeparture> = Self::parse_envelope(status, body)?;
        Ok(raw.into_iter().map(ApiDeparture::from).collect())
    }
}

#[async_trait]
impl TransitClient for DrtTransitClient {
    #[instrument(skip(self))]
    async fn stops(&self, query: &str) -> Result<Vec<ApiStop>, TransitError> {
        let url = self.endpoint(&["stops"])?;
        let (status, body) = self.fetch(url, &[("q", query)]).await?;
        let stops = Self::parse_stops_response(status, &body)?;

        debug!(count = stops.len(), "Stops found");
        Ok(stops)
    }

    #[instrument(skip(self))]
    async fn stop(&self, id: &str) -> Result<ApiStop, TransitError> {
        let url = self.endpoint(&["stops", id])?;
        let (status, body) = self.fetch(url, &[]).await?;
        Self::parse_stop_response(id, status, &body)
    }

    #[instrument(skip(self))]
    async fn departures(&self, id: &str) -> Result<Vec<ApiDeparture>, TransitError> {
        let url = self.endpoint(&["stops", id, "departures"])?;
        let (status, body) = self.fetch(url, &[]).await?;
        let departures = Self::parse_departures_response(status, &body)?;

        debug!(count = departures.len(), "Departures found");
        Ok(departures)
    }

    fn set_base_url(&self, base_url: &str) -> Result<(), TransitError> {
        let url = validate_base_url(base_url).map_err(TransitError::ConfigurationError)?;
        info!(base_url = %url, "Transit API base URL changed");
        self.base_url.store(Arc::new(url));
        Ok(())
    }

    fn base_url(&self) -> String {
        self.base_url.load().to_string()
    }
}
