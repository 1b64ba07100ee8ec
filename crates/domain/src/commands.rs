//! Launcher commands - Strongly typed representations of user intents

use serde::{Deserialize, Serialize};

use crate::value_objects::StopId;

/// Literal prefix selecting the departures screen
pub const DEPARTURES_PREFIX: &str = "departures ";

/// Trailing token that forces the departures screen to refresh
pub const REFRESH_MARKER: &str = "refresh";

/// All intents a query string can express
///
/// Produced fresh for every query; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryCommand {
    /// Empty query: list favorite stops
    ShowFavorites,
    /// Free-text stop search
    SearchStops {
        /// The raw search term
        term: String,
    },
    /// Stop header plus upcoming departures
    ShowDeparturesMenu {
        /// Stop to show
        stop_id: StopId,
    },
    /// Re-issue the departures query so the host re-fetches it
    RefreshDepartures {
        /// Stop to refresh
        stop_id: StopId,
    },
    /// Stale or unexpected query text
    Unrecognized {
        /// The original input that couldn't be parsed
        original_input: String,
    },
}

impl QueryCommand {
    /// Human-readable description, used in logs
    pub fn description(&self) -> String {
        match self {
            Self::ShowFavorites => "Show favorites".to_string(),
            Self::SearchStops { term } => format!("Search stops: {term}"),
            Self::ShowDeparturesMenu { stop_id } => format!("Departures for stop {stop_id}"),
            Self::RefreshDepartures { stop_id } => format!("Refresh departures for stop {stop_id}"),
            Self::Unrecognized { original_input } => format!("Unrecognized query: {original_input}"),
        }
    }
}

/// Favorite mutations carried by custom action payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "stop_id", rename_all = "snake_case")]
pub enum FavoriteAction {
    /// Pin a stop
    Add(StopId),
    /// Unpin a stop
    Remove(StopId),
}

impl FavoriteAction {
    /// Parse a payload of the form `add <id>` or `remove <id>`
    ///
    /// Returns `None` for anything else.
    pub fn parse(payload: &str) -> Option<Self> {
        if let Some(rest) = payload.strip_prefix("add ") {
            return StopId::parse(rest).ok().map(Self::Add);
        }
        if let Some(rest) = payload.strip_prefix("remove ") {
            return StopId::parse(rest).ok().map(Self::Remove);
        }
        None
    }

    /// Encode as an opaque payload string
    pub fn to_payload(&self) -> String {
        match self {
            Self::Add(id) => format!("add {id}"),
            Self::Remove(id) => format!("remove {id}"),
        }
    }

    /// The stop this action targets
    pub const fn stop_id(&self) -> &StopId {
        match self {
            Self::Add(id) | Self::Remove(id) => id,
        }
    }
}
