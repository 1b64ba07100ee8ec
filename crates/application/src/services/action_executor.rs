//! Action executor
//!
//! Replays custom action payloads emitted by earlier result items against the
//! favorites repository.

use std::sync::Arc;

use domain::{FavoriteAction, QueryCommand, RenderInstruction};
use tracing::{debug, info, instrument, warn};

use super::favorites_repository::FavoritesRepository;
use super::result_items::ResultItemBuilder;
use crate::command_parser::QueryParser;
use crate::error::ApplicationError;
use crate::ports::TransitPort;

/// Applies favorite mutations selected by the user
pub struct ActionExecutor {
    transit: Arc<dyn TransitPort>,
    favorites: Arc<FavoritesRepository>,
}

impl std::fmt::Debug for ActionExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionExecutor").finish_non_exhaustive()
    }
}

impl ActionExecutor {
    /// Create an executor over the given transit port and favorites
    pub fn new(transit: Arc<dyn TransitPort>, favorites: Arc<FavoritesRepository>) -> Self {
        Self { transit, favorites }
    }

    /// Execute one payload
    ///
    /// Successful mutations rewrite the query to the bare keyword so the host
    /// falls back to the favorites screen. Unknown payloads are a no-op.
    #[instrument(skip(self))]
    pub async fn execute(&self, payload: &str, keyword: &str) -> RenderInstruction {
        let Some(action) = FavoriteAction::parse(payload) else {
            debug!(payload, "Ignoring unknown action payload");
            return RenderInstruction::NoOp;
        };

        match self.apply(&action).await {
            Ok(()) => RenderInstruction::RewriteQuery(QueryParser::render(
                keyword,
                &QueryCommand::ShowFavorites,
            )),
            Err(e) => {
                warn!(error = %e, stop_id = %action.stop_id(), "Favorite action failed");
                RenderInstruction::ItemList(vec![ResultItemBuilder::error_item(&e)])
            },
        }
    }

    async fn apply(&self, action: &FavoriteAction) -> Result<(), ApplicationError> {
        match action {
            FavoriteAction::Add(id) => {
                // Favorites keep the whole stop so they render without a lookup
                let stop = self.transit.stop(id).await?;
                info!(stop_id = %stop.id, name = %stop.name, "Stop added to favorites");
                self.favorites.add(stop);
            },
            FavoriteAction::Remove(id) => {
                self.favorites.remove(id);
                info!(stop_id = %id, "Stop removed from favorites");
            },
        }
        Ok(())
    }
}
