//! Transit stops and their departures

use serde::{Deserialize, Serialize};

use crate::value_objects::StopId;

/// A physical transit stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Stop identifier (identity)
    pub id: StopId,
    /// Human-readable stop name
    pub name: String,
    /// Latitude coordinate
    pub lat: f64,
    /// Longitude coordinate
    pub lon: f64,
}

impl Stop {
    /// Create a new stop
    pub fn new(id: StopId, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id,
            name: name.into(),
            lat,
            lon,
        }
    }

    /// Label shown in result lists, e.g. `#2045 Queen St / King St`
    pub fn label(&self) -> String {
        format!("#{} {}", self.id, self.name)
    }

    /// Coordinates rendered as `lat, lon`
    pub fn coordinates(&self) -> String {
        format!("{}, {}", self.lat, self.lon)
    }
}

/// A predicted or scheduled vehicle departure from a stop
///
/// Never stored, only rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    /// Route identifier, e.g. `"900"`
    pub route_id: String,
    /// Headsign / destination
    pub destination: String,
    /// `false` when the time comes from the schedule rather than live tracking
    pub is_real_time: bool,
    /// Display-formatted departure time
    pub time: String,
    /// Lateness text; empty means on time or unknown
    #[serde(default)]
    pub time_late: String,
}

impl Departure {
    /// Label shown in result lists: `<route> <destination>`
    pub fn label(&self) -> String {
        format!("{} {}", self.route_id, self.destination)
    }

    /// Time description: scheduled times carry a trailing `*`, lateness is
    /// appended as ` - <late>`
    pub fn format_time(&self) -> String {
        let mut desc = self.time.clone();
        if !self.is_real_time {
            desc.push('*');
        }
        if !self.time_late.is_empty() {
            desc.push_str(&format!(" - {}", self.time_late));
        }
        desc
    }
}
