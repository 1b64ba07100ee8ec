//! Favorite stops collection

use serde::{Deserialize, Serialize};

use super::Stop;
use crate::value_objects::StopId;

/// Ordered, deduplicated list of favorite stops, most recently added first
///
/// Snapshots are immutable: [`FavoritesList::with_added`] and
/// [`FavoritesList::without`] return a new list and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoritesList {
    stops: Vec<Stop>,
}

impl FavoritesList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops in display order
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Whether a stop with this id is present
    pub fn contains(&self, id: &StopId) -> bool {
        self.stops.iter().any(|s| &s.id == id)
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// New snapshot with `stop` at the front and any older entry for the same
    /// id removed
    #[must_use]
    pub fn with_added(&self, stop: Stop) -> Self {
        let mut stops = Vec::with_capacity(self.stops.len() + 1);
        stops.extend(self.stops.iter().filter(|s| s.id != stop.id).cloned());
        stops.insert(0, stop);
        Self { stops }
    }

    /// New snapshot without any entry matching `id`
    #[must_use]
    pub fn without(&self, id: &StopId) -> Self {
        Self {
            stops: self.stops.iter().filter(|s| &s.id != id).cloned().collect(),
        }
    }
}
