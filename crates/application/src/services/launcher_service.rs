//! Launcher service - the boundary the host talks to
//!
//! Owns the dispatcher, the executor, and the favorites repository for one
//! running extension instance, and tracks the runtime-mutable preferences
//! (keyword and API endpoint).

use std::sync::Arc;

use arc_swap::ArcSwap;
use domain::RenderInstruction;
use tracing::{debug, info};

use super::action_executor::ActionExecutor;
use super::favorites_repository::FavoritesRepository;
use super::query_dispatcher::QueryDispatcher;
use crate::error::ApplicationError;
use crate::ports::TransitPort;

/// Preference id for the launcher keyword
pub const PREF_KEYWORD: &str = "kw";

/// Preference id for the transit API base URL
pub const PREF_API_BASE: &str = "drtapi";

/// Host-facing entry point
pub struct LauncherService {
    dispatcher: QueryDispatcher,
    executor: ActionExecutor,
    favorites: Arc<FavoritesRepository>,
    transit: Arc<dyn TransitPort>,
    keyword: ArcSwap<String>,
}

impl std::fmt::Debug for LauncherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LauncherService")
            .field("keyword", &self.keyword())
            .field("favorites", &self.favorites.list().len())
            .finish_non_exhaustive()
    }
}

impl LauncherService {
    /// Create a service with an empty favorites list
    pub fn new(transit: Arc<dyn TransitPort>, keyword: impl Into<String>) -> Self {
        Self::with_favorites(transit, Arc::new(FavoritesRepository::new()), keyword)
    }

    /// Create a service around an existing favorites repository
    pub fn with_favorites(
        transit: Arc<dyn TransitPort>,
        favorites: Arc<FavoritesRepository>,
        keyword: impl Into<String>,
    ) -> Self {
        Self {
            dispatcher: QueryDispatcher::new(Arc::clone(&transit), Arc::clone(&favorites)),
            executor: ActionExecutor::new(Arc::clone(&transit), Arc::clone(&favorites)),
            favorites,
            transit,
            keyword: ArcSwap::from_pointee(keyword.into()),
        }
    }

    /// Current launcher keyword
    pub fn keyword(&self) -> String {
        self.keyword.load().as_ref().clone()
    }

    /// The favorites repository backing this instance
    pub fn favorites(&self) -> &Arc<FavoritesRepository> {
        &self.favorites
    }

    /// A query was typed; `keyword` is the one the host matched on
    pub async fn on_query(&self, argument: Option<&str>, keyword: &str) -> RenderInstruction {
        self.dispatcher.dispatch(argument, keyword).await
    }

    /// A result item carrying a custom action was activated
    pub async fn on_item_selected(&self, payload: &str) -> RenderInstruction {
        let keyword = self.keyword();
        self.executor.execute(payload, &keyword).await
    }

    /// Initial preference load from the host
    pub fn on_preferences(&self, keyword: &str, api_base: &str) -> Result<(), ApplicationError> {
        self.transit.set_endpoint(api_base)?;
        self.set_keyword(keyword);
        Ok(())
    }

    /// A single preference changed at runtime
    ///
    /// Unknown ids are ignored. An invalid endpoint leaves the previous one
    /// in place and reports the error.
    pub fn on_preference_changed(&self, id: &str, value: &str) -> Result<(), ApplicationError> {
        match id {
            PREF_KEYWORD => self.set_keyword(value),
            PREF_API_BASE => self.transit.set_endpoint(value)?,
            _ => debug!(id, "Ignoring unknown preference"),
        }
        Ok(())
    }

    fn set_keyword(&self, keyword: &str) {
        info!(keyword, "Launcher keyword changed");
        self.keyword.store(Arc::new(keyword.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use domain::{Stop, StopId};

    use super::*;
    use crate::ports::MockTransitPort;

    fn resolving_transit() -> MockTransitPort {
        let mut transit = MockTransitPort::new();
        transit
            .expect_stop()
            .returning(|id| Ok(Stop::new(id.clone(), "Queen St", 43.9, -78.9)));
        transit
    }

    #[tokio::test]
    async fn selection_uses_current_keyword() {
        let service = LauncherService::new(Arc::new(resolving_transit()), "drt");
        service.on_preference_changed(PREF_KEYWORD, "bus").unwrap();

        let result = service.on_item_selected("add 42").await;

        assert_eq!(result, RenderInstruction::RewriteQuery("bus".to_string()));
    }

    #[tokio::test]
    async fn added_favorite_shows_up_in_next_query() {
        let service = LauncherService::new(Arc::new(resolving_transit()), "drt");

        service.on_item_selected("add 42").await;
        let result = service.on_query(None, "drt").await;

        assert_eq!(result.items().len(), 1);
        assert_eq!(result.items()[0].label, "#42 Queen St");
        assert!(service.favorites().has(&StopId::from(42_u64)));
    }

    #[test]
    fn endpoint_change_is_forwarded() {
        let mut transit = MockTransitPort::new();
        transit
            .expect_set_endpoint()
            .withf(|url| url.to_string() == "http://localhost:8080")
            .times(1)
            .returning(|_| Ok(()));

        let service = LauncherService::new(Arc::new(transit), "drt");
        service
            .on_preference_changed(PREF_API_BASE, "http://localhost:8080")
            .unwrap();
    }

    #[test]
    fn invalid_endpoint_is_reported() {
        let mut transit = MockTransitPort::new();
        transit
            .expect_set_endpoint()
            .returning(|_| Err(ApplicationError::Configuration("bad url".to_string())));

        let service = LauncherService::new(Arc::new(transit), "drt");
        assert!(service.on_preference_changed(PREF_API_BASE, "nope").is_err());
    }

    #[test]
    fn initial_preferences_set_keyword_and_endpoint() {
        let mut transit = MockTransitPort::new();
        transit.expect_set_endpoint().times(1).returning(|_| Ok(()));

        let service = LauncherService::new(Arc::new(transit), "drt");
        service
            .on_preferences("transit", "https://drtapi.example.net")
            .unwrap();

        assert_eq!(service.keyword(), "transit");
    }

    #[test]
    fn unknown_preference_is_ignored() {
        let service = LauncherService::new(Arc::new(MockTransitPort::new()), "drt");
        service.on_preference_changed("theme", "dark").unwrap();
        assert_eq!(service.keyword(), "drt");
    }
}
