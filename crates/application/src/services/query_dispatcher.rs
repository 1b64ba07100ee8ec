//! Query dispatcher
//!
//! Parses each raw launcher argument into a [`QueryCommand`], runs it against
//! the transit port and the favorites repository, and answers with a
//! [`RenderInstruction`]. Failures never escape: any error becomes a single
//! `Error` item and everything fetched before it is discarded.

use std::sync::Arc;

use chrono::Local;
use domain::{QueryCommand, RenderInstruction, ResultItem, StopId};
use tracing::{debug, info, instrument, warn};

use super::favorites_repository::FavoritesRepository;
use super::result_items::{MAX_RESULTS, ResultItemBuilder};
use crate::command_parser::QueryParser;
use crate::error::ApplicationError;
use crate::ports::TransitPort;

/// Turns query text into render instructions
pub struct QueryDispatcher {
    transit: Arc<dyn TransitPort>,
    favorites: Arc<FavoritesRepository>,
}

impl std::fmt::Debug for QueryDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryDispatcher")
            .field("favorites", &self.favorites.list().len())
            .finish_non_exhaustive()
    }
}

impl QueryDispatcher {
    /// Create a dispatcher over the given transit port and favorites
    pub fn new(transit: Arc<dyn TransitPort>, favorites: Arc<FavoritesRepository>) -> Self {
        Self { transit, favorites }
    }

    /// Evaluate one query argument under the current keyword
    #[instrument(skip(self))]
    pub async fn dispatch(&self, argument: Option<&str>, keyword: &str) -> RenderInstruction {
        let command = QueryParser::parse(argument);
        debug!(command = %command.description(), "Parsed query");

        match self.run(&command, keyword).await {
            Ok(instruction) => instruction,
            Err(e) => {
                warn!(error = %e, command = %command.description(), "Query failed");
                RenderInstruction::ItemList(vec![ResultItemBuilder::error_item(&e)])
            },
        }
    }

    async fn run(
        &self,
        command: &QueryCommand,
        keyword: &str,
    ) -> Result<RenderInstruction, ApplicationError> {
        match command {
            QueryCommand::ShowFavorites => Ok(self.show_favorites(keyword)),
            QueryCommand::SearchStops { term } => self.search_stops(command, term, keyword).await,
            QueryCommand::ShowDeparturesMenu { stop_id } => {
                self.show_departures(stop_id, keyword).await
            },
            QueryCommand::RefreshDepartures { stop_id } => {
                let target = QueryCommand::ShowDeparturesMenu {
                    stop_id: stop_id.clone(),
                };
                Ok(RenderInstruction::RewriteQuery(QueryParser::render(keyword, &target)))
            },
            QueryCommand::Unrecognized { original_input } => {
                let target = QueryParser::without_bounce_marker(original_input);
                debug!(%original_input, "Stripping legacy bounce marker");
                Ok(RenderInstruction::RewriteQuery(QueryParser::render(keyword, &target)))
            },
        }
    }

    fn show_favorites(&self, keyword: &str) -> RenderInstruction {
        let favorites = self.favorites.list();
        let builder = ResultItemBuilder::new(keyword, &favorites);

        let items = favorites
            .stops()
            .iter()
            .map(|stop| builder.stop_item(stop, &QueryCommand::ShowFavorites))
            .collect();

        RenderInstruction::ItemList(items)
    }

    async fn search_stops(
        &self,
        command: &QueryCommand,
        term: &str,
        keyword: &str,
    ) -> Result<RenderInstruction, ApplicationError> {
        let stops = self.transit.stops(term).await?;
        info!(term, found = stops.len(), "Stop search completed");

        let favorites = self.favorites.list();
        let builder = ResultItemBuilder::new(keyword, &favorites);

        let items = stops
            .iter()
            .take(MAX_RESULTS)
            .map(|stop| builder.stop_item(stop, command))
            .collect();

        Ok(RenderInstruction::ItemList(items))
    }

    async fn show_departures(
        &self,
        stop_id: &StopId,
        keyword: &str,
    ) -> Result<RenderInstruction, ApplicationError> {
        let stop = self.transit.stop(stop_id).await?;
        let departures = self.transit.departures(&stop.id).await?;

        let favorites = self.favorites.list();
        let builder = ResultItemBuilder::new(keyword, &favorites);

        let mut items: Vec<ResultItem> = Vec::with_capacity(MAX_RESULTS + 1);
        items.push(builder.departure_header(&stop, &Local::now()));
        items.extend(
            departures
                .iter()
                .take(MAX_RESULTS)
                .map(ResultItemBuilder::departure_item),
        );

        Ok(RenderInstruction::ItemList(items))
    }
}
