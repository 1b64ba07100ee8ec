//! Domain layer for the DRT launcher
//!
//! Contains stops, departures, favorites, result items, commands, and domain
//! errors. This layer has no I/O and defines the ubiquitous language.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use commands::{DEPARTURES_PREFIX, FavoriteAction, QueryCommand, REFRESH_MARKER};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
