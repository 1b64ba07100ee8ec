//! Result item builder
//!
//! Pure conversion from stops and departures into presentable
//! [`ResultItem`]s. No I/O happens here; everything the items need (keyword,
//! favorites snapshot, parent screen) is passed in.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use domain::{
    Departure, FavoriteAction, FavoritesList, ItemAction, QueryCommand, ResultItem, Stop,
};

use crate::command_parser::QueryParser;

/// Maximum number of stops or departures shown per screen
pub const MAX_RESULTS: usize = 5;

/// Builds result items for one render pass
#[derive(Debug, Clone, Copy)]
pub struct ResultItemBuilder<'a> {
    keyword: &'a str,
    favorites: &'a FavoritesList,
}

impl<'a> ResultItemBuilder<'a> {
    /// Create a builder for the given keyword and favorites snapshot
    pub const fn new(keyword: &'a str, favorites: &'a FavoritesList) -> Self {
        Self { keyword, favorites }
    }

    /// `#<id> <name>` with coordinates; enter opens departures, alt-enter the
    /// stop menu whose Back returns to `parent`
    pub fn stop_item(&self, stop: &Stop, parent: &QueryCommand) -> ResultItem {
        let departures = QueryCommand::ShowDeparturesMenu {
            stop_id: stop.id.clone(),
        };
        ResultItem::new(stop.label(), self.set_query(&departures))
            .with_description(stop.coordinates())
            .selectable()
            .with_secondary(self.stop_menu(stop, parent))
    }

    /// Header of the departures screen; enter refreshes the screen
    pub fn departure_header<Tz>(&self, stop: &Stop, updated_at: &DateTime<Tz>) -> ResultItem
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let refresh = QueryCommand::RefreshDepartures {
            stop_id: stop.id.clone(),
        };
        let this_screen = QueryCommand::ShowDeparturesMenu {
            stop_id: stop.id.clone(),
        };
        ResultItem::new(stop.name.clone(), self.set_query(&refresh))
            .with_description(format!("Last updated {}", updated_at.format("%H:%M:%S")))
            .with_secondary(self.stop_menu(stop, &this_screen))
    }

    /// `<route> <destination>` with the formatted time; enter closes the list
    pub fn departure_item(departure: &Departure) -> ResultItem {
        ResultItem::new(departure.label(), ItemAction::Dismiss)
            .with_description(departure.format_time())
    }

    /// Secondary menu: favorite toggle plus Back to `parent`
    pub fn stop_menu(&self, stop: &Stop, parent: &QueryCommand) -> ItemAction {
        let toggle = if self.favorites.contains(&stop.id) {
            ResultItem::new(
                "Remove from favorites",
                ItemAction::CustomAction(FavoriteAction::Remove(stop.id.clone()).to_payload()),
            )
        } else {
            ResultItem::new(
                "Add to favorites",
                ItemAction::CustomAction(FavoriteAction::Add(stop.id.clone()).to_payload()),
            )
        };
        let back = ResultItem::new("Back", self.set_query(parent));

        ItemAction::ShowMenu(vec![toggle, back])
    }

    /// Single `Error` row carrying the failure message
    pub fn error_item(error: &dyn Display) -> ResultItem {
        ResultItem::new("Error", ItemAction::Dismiss).with_description(error.to_string())
    }

    fn set_query(&self, command: &QueryCommand) -> ItemAction {
        ItemAction::SetQuery(QueryParser::render(self.keyword, command))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use domain::StopId;

    use super::*;

    fn stop() -> Stop {
        Stop::new(StopId::from(42_u64), "Queen St / King St", 43.8975, -78.8626)
    }

    fn menu_entries(action: Option<&ItemAction>) -> Vec<ResultItem> {
        match action {
            Some(ItemAction::ShowMenu(items)) => items.clone(),
            other => panic!("expected a menu, got {other:?}"),
        }
    }

    #[test]
    fn stop_item_shape() {
        let favorites = FavoritesList::new();
        let builder = ResultItemBuilder::new("drt", &favorites);

        let item = builder.stop_item(&stop(), &QueryCommand::ShowFavorites);

        assert_eq!(item.label, "#42 Queen St / King St");
        assert_eq!(item.description.as_deref(), Some("43.8975, -78.8626"));
        assert!(item.selectable);
        assert_eq!(
            item.primary_action,
            ItemAction::SetQuery("drt departures 42".to_string())
        );
    }

    #[test]
    fn menu_offers_add_when_not_favorited() {
        let favorites = FavoritesList::new();
        let builder = ResultItemBuilder::new("drt", &favorites);

        let entries = menu_entries(Some(&builder.stop_menu(&stop(), &QueryCommand::ShowFavorites)));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Add to favorites");
        assert_eq!(
            entries[0].primary_action,
            ItemAction::CustomAction("add 42".to_string())
        );
        assert_eq!(entries[1].label, "Back");
    }

    #[test]
    fn menu_offers_remove_when_favorited() {
        let favorites = FavoritesList::new().with_added(stop());
        let builder = ResultItemBuilder::new("drt", &favorites);

        let entries = menu_entries(Some(&builder.stop_menu(&stop(), &QueryCommand::ShowFavorites)));

        assert_eq!(entries[0].label, "Remove from favorites");
        assert_eq!(
            entries[0].primary_action,
            ItemAction::CustomAction("remove 42".to_string())
        );
    }

    #[test]
    fn back_returns_to_search_screen() {
        let favorites = FavoritesList::new();
        let builder = ResultItemBuilder::new("drt", &favorites);
        let parent = QueryCommand::SearchStops {
            term: "queen".to_string(),
        };

        let item = builder.stop_item(&stop(), &parent);
        let entries = menu_entries(item.secondary_action.as_ref());

        assert_eq!(
            entries[1].primary_action,
            ItemAction::SetQuery("drt queen".to_string())
        );
    }

    #[test]
    fn back_returns_to_favorites_screen() {
        let favorites = FavoritesList::new().with_added(stop());
        let builder = ResultItemBuilder::new("drt", &favorites);

        let item = builder.stop_item(&stop(), &QueryCommand::ShowFavorites);
        let entries = menu_entries(item.secondary_action.as_ref());

        assert_eq!(entries[1].primary_action, ItemAction::SetQuery("drt".to_string()));
    }

    #[test]
    fn departure_header_shape() {
        let favorites = FavoritesList::new();
        let builder = ResultItemBuilder::new("drt", &favorites);
        let at = Utc.with_ymd_and_hms(2026, 10, 15, 14, 3, 9).unwrap();

        let header = builder.departure_header(&stop(), &at);

        assert_eq!(header.label, "Queen St / King St");
        assert_eq!(header.description.as_deref(), Some("Last updated 14:03:09"));
        assert!(!header.selectable);
        assert_eq!(
            header.primary_action,
            ItemAction::SetQuery("drt departures 42 refresh".to_string())
        );

        let entries = menu_entries(header.secondary_action.as_ref());
        assert_eq!(
            entries[1].primary_action,
            ItemAction::SetQuery("drt departures 42".to_string())
        );
    }

    #[test]
    fn scheduled_late_departure_description() {
        let departure = Departure {
            route_id: "915".to_string(),
            destination: "Ajax Station".to_string(),
            is_real_time: false,
            time: "14:20".to_string(),
            time_late: "2 min".to_string(),
        };

        let item = ResultItemBuilder::departure_item(&departure);

        assert_eq!(item.label, "915 Ajax Station");
        assert_eq!(item.description.as_deref(), Some("14:20* - 2 min"));
        assert_eq!(item.primary_action, ItemAction::Dismiss);
        assert!(!item.selectable);
    }

    #[test]
    fn error_item_shape() {
        let item = ResultItemBuilder::error_item(&"connection refused");
        assert_eq!(item.label, "Error");
        assert_eq!(item.description.as_deref(), Some("connection refused"));
        assert!(!item.selectable);
        assert_eq!(item.primary_action, ItemAction::Dismiss);
    }
}
