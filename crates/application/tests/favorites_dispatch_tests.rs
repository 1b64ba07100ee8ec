//! Property-based tests for the favorites view
//!
//! After any sequence of adds and removes, dispatching an absent argument must
//! list exactly the stored favorites, in stored order, without the network.

use std::sync::Arc;

use application::{ApplicationError, FavoritesRepository, QueryDispatcher, TransitPort};
use async_trait::async_trait;
use domain::{Departure, ItemAction, RenderInstruction, Stop, StopId};
use proptest::prelude::*;

/// Transit port that fails every lookup
struct OfflineTransit;

#[async_trait]
impl TransitPort for OfflineTransit {
    async fn stops(&self, _term: &str) -> Result<Vec<Stop>, ApplicationError> {
        Err(ApplicationError::Transport("offline".to_string()))
    }

    async fn stop(&self, _id: &StopId) -> Result<Stop, ApplicationError> {
        Err(ApplicationError::Transport("offline".to_string()))
    }

    async fn departures(&self, _id: &StopId) -> Result<Vec<Departure>, ApplicationError> {
        Err(ApplicationError::Transport("offline".to_string()))
    }

    fn set_endpoint(&self, _base_url: &str) -> Result<(), ApplicationError> {
        Ok(())
    }
}

fn stop(id: u64) -> Stop {
    Stop::new(StopId::from(id), format!("Stop {id}"), 43.9, -78.9)
}

/// `true` adds the stop, `false` removes it
fn operations() -> impl Strategy<Value = Vec<(bool, u64)>> {
    prop::collection::vec((any::<bool>(), 0u64..10), 0..40)
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn favorites_view_matches_repository(ops in operations()) {
        let favorites = Arc::new(FavoritesRepository::new());
        for (add, id) in ops {
            if add {
                favorites.add(stop(id));
            } else {
                favorites.remove(&StopId::from(id));
            }
        }

        let dispatcher = QueryDispatcher::new(Arc::new(OfflineTransit), Arc::clone(&favorites));
        let result = runtime().block_on(dispatcher.dispatch(None, "drt"));

        let RenderInstruction::ItemList(items) = result else {
            return Err(TestCaseError::fail("favorites view must be an item list"));
        };
        let list = favorites.list();

        prop_assert_eq!(items.len(), list.len());
        for (item, stop) in items.iter().zip(list.stops()) {
            prop_assert_eq!(&item.label, &stop.label());
            prop_assert_eq!(
                &item.primary_action,
                &ItemAction::SetQuery(format!("drt departures {}", stop.id))
            );
        }
    }

    #[test]
    fn blank_argument_matches_absent_argument(ops in operations(), whitespace in "[ \t]{0,4}") {
        let favorites = Arc::new(FavoritesRepository::with_stops(
            ops.iter().filter(|(add, _)| *add).map(|(_, id)| stop(*id)),
        ));
        let dispatcher = QueryDispatcher::new(Arc::new(OfflineTransit), favorites);
        let rt = runtime();

        let absent = rt.block_on(dispatcher.dispatch(None, "drt"));
        let blank = rt.block_on(dispatcher.dispatch(Some(&whitespace), "drt"));
        prop_assert_eq!(absent, blank);
    }
}
