//! Query parser - turns the raw launcher argument into a [`QueryCommand`]
//!
//! Grammar, first match wins:
//!
//! 1. absent or blank → [`QueryCommand::ShowFavorites`]
//! 2. ends with the legacy bounce marker `` ` `` → [`QueryCommand::Unrecognized`],
//!    which the dispatcher answers by rewriting the query without the marker
//! 3. `departures <id>` → [`QueryCommand::ShowDeparturesMenu`]
//! 4. `departures <id> refresh` → [`QueryCommand::RefreshDepartures`]
//! 5. anything else → [`QueryCommand::SearchStops`] with the whole argument
//!
//! `<id>` is a single whitespace-free token. A `departures ` argument with any
//! other tail is a plain search, so stop names starting with "departures" stay
//! searchable.

use domain::{DEPARTURES_PREFIX, QueryCommand, REFRESH_MARKER, StopId};

/// Suffix older releases appended to bounce the query back to the host
const LEGACY_BOUNCE_MARKER: char = '`';

/// Parser for launcher query arguments
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParser;

impl QueryParser {
    /// Parse a raw query argument
    pub fn parse(raw: Option<&str>) -> QueryCommand {
        let Some(argument) = raw.filter(|a| !a.trim().is_empty()) else {
            return QueryCommand::ShowFavorites;
        };

        if argument.trim_end().ends_with(LEGACY_BOUNCE_MARKER) {
            return QueryCommand::Unrecognized {
                original_input: argument.to_string(),
            };
        }

        Self::parse_departures(argument).unwrap_or_else(|| QueryCommand::SearchStops {
            term: argument.to_string(),
        })
    }

    /// Command an [`QueryCommand::Unrecognized`] input stands for once the
    /// trailing bounce markers (and any whitespace around them) are stripped
    pub fn without_bounce_marker(original_input: &str) -> QueryCommand {
        let stripped =
            original_input.trim_end_matches(|c: char| c == LEGACY_BOUNCE_MARKER || c.is_whitespace());
        Self::parse(Some(stripped))
    }

    /// Render a command back into the full query text the host should show
    ///
    /// Inverse of [`QueryParser::parse`] for every command it produces.
    pub fn render(keyword: &str, command: &QueryCommand) -> String {
        let argument = match command {
            QueryCommand::ShowFavorites => return keyword.to_string(),
            QueryCommand::SearchStops { term } => term.clone(),
            QueryCommand::ShowDeparturesMenu { stop_id } => format!("{DEPARTURES_PREFIX}{stop_id}"),
            QueryCommand::RefreshDepartures { stop_id } => {
                format!("{DEPARTURES_PREFIX}{stop_id} {REFRESH_MARKER}")
            },
            QueryCommand::Unrecognized { original_input } => original_input.clone(),
        };
        format!("{keyword} {argument}")
    }

    fn parse_departures(argument: &str) -> Option<QueryCommand> {
        let rest = argument.strip_prefix(DEPARTURES_PREFIX)?;
        let mut tokens = rest.split_whitespace();
        let stop_id = StopId::parse(tokens.next()?).ok()?;

        match (tokens.next(), tokens.next()) {
            (None, _) => Some(QueryCommand::ShowDeparturesMenu { stop_id }),
            (Some(REFRESH_MARKER), None) => Some(QueryCommand::RefreshDepartures { stop_id }),
            _ => None,
        }
    }
}
