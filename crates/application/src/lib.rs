//! Application layer - Use cases and orchestration
//!
//! Contains the query parser, the dispatcher and executor state machine, the
//! favorites repository, and port definitions. Orchestrates domain objects and
//! infrastructure adapters.

pub mod command_parser;
pub mod error;
pub mod ports;
pub mod services;

pub use command_parser::QueryParser;
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
