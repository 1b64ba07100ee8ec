//! DRT public transit integration
//!
//! Provides stop search, stop lookup, and live departures via the DRT API
//! (`https://drtapi.geek1011.net/v2`).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`TransitClient`] defines the
//! interface, implemented by [`DrtTransitClient`]. Every response is wrapped
//! in a `{"status", "result"}` envelope; a non-success status surfaces as
//! [`TransitError::Api`] carrying the API's message.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_transit::{DrtTransitClient, TransitClient, TransitConfig};
//!
//! let client = DrtTransitClient::new(&TransitConfig::default())?;
//! let stops = client.stops("queen street").await?;
//! let departures = client.departures(&stops[0].id).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DrtTransitClient, TransitClient};
pub use config::TransitConfig;
pub use error::TransitError;
pub use models::{ApiDeparture, ApiStop};
