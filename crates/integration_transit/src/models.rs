//! Transit data models
//!
//! Typed representations of stops and departures as returned by the DRT API,
//! plus the raw wire types they are decoded from.

use serde::{Deserialize, Serialize};

/// A stop as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiStop {
    /// Stop identifier, normalized to its string form
    pub id: String,
    /// Human-readable stop name
    pub name: String,
    /// Latitude coordinate
    pub lat: f64,
    /// Longitude coordinate
    pub lon: f64,
}

/// A departure as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiDeparture {
    /// Route identifier
    pub route_id: String,
    /// Destination / headsign
    pub destination: String,
    /// Whether the time is live rather than scheduled
    pub is_real_time: bool,
    /// Display-formatted time
    pub time: String,
    /// Lateness text, empty when on time or unknown
    pub time_late: String,
}

// --- Raw API response types for deserialization ---

/// Every response is wrapped in `{"status": ..., "result": ...}`
#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvelope {
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) result: serde_json::Value,
}

/// Stop ids arrive as either JSON numbers or strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => n.to_string(),
            RawId::Float(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStop {
    pub(crate) id: RawId,
    pub(crate) name: String,
    pub(crate) lat: f64,
    pub(crate) lon: f64,
}

impl From<RawStop> for ApiStop {
    fn from(raw: RawStop) -> Self {
        Self {
            id: raw.id.into(),
            name: raw.name,
            lat: raw.lat,
            lon: raw.lon,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDeparture {
    pub(crate) route_id: RawId,
    pub(crate) destination: String,
    pub(crate) is_real_time: bool,
    pub(crate) time: String,
    #[serde(default)]
    pub(crate) time_late: Option<String>,
}

impl From<RawDeparture> for ApiDeparture {
    fn from(raw: RawDeparture) -> Self {
        Self {
            route_id: raw.route_id.into(),
            destination: raw.destination,
            is_real_time: raw.is_real_time,
            time: raw.time,
            time_late: raw.time_late.unwrap_or_default(),
        }
    }
}
