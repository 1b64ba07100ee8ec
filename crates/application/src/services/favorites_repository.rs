//! Favorites repository
//!
//! In-memory, process-lifetime store of pinned stops. Every mutation swaps in
//! a fresh [`FavoritesList`] snapshot, so readers holding an older snapshot
//! never observe a half-applied change.

use std::sync::Arc;

use domain::{FavoritesList, Stop, StopId};
use parking_lot::RwLock;
use tracing::debug;

/// Owned store of favorite stops
#[derive(Debug, Default)]
pub struct FavoritesRepository {
    current: RwLock<Arc<FavoritesList>>,
}

impl FavoritesRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `stops`, first entry on top
    pub fn with_stops(stops: impl IntoIterator<Item = Stop>) -> Self {
        let stops: Vec<Stop> = stops.into_iter().collect();
        let list = stops
            .into_iter()
            .rev()
            .fold(FavoritesList::new(), |acc, stop| acc.with_added(stop));
        Self {
            current: RwLock::new(Arc::new(list)),
        }
    }

    /// Current snapshot, most recently added first
    pub fn list(&self) -> Arc<FavoritesList> {
        Arc::clone(&*self.current.read())
    }

    /// Whether a stop with this id is pinned
    pub fn has(&self, id: &StopId) -> bool {
        self.current.read().contains(id)
    }

    /// Pin a stop, moving it to the top if it was already pinned
    pub fn add(&self, stop: Stop) {
        let mut current = self.current.write();
        debug!(stop_id = %stop.id, "Adding favorite");
        *current = Arc::new(current.with_added(stop));
    }

    /// Unpin every entry matching `id`
    pub fn remove(&self, id: &StopId) {
        let mut current = self.current.write();
        debug!(stop_id = %id, "Removing favorite");
        *current = Arc::new(current.without(id));
    }
}
