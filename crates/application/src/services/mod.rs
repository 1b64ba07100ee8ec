//! Application services

mod action_executor;
mod favorites_repository;
mod launcher_service;
mod query_dispatcher;
mod result_items;

pub use action_executor::ActionExecutor;
pub use favorites_repository::FavoritesRepository;
pub use launcher_service::{LauncherService, PREF_API_BASE, PREF_KEYWORD};
pub use query_dispatcher::QueryDispatcher;
pub use result_items::{MAX_RESULTS, ResultItemBuilder};
