//! Value Objects - Immutable, identity-less domain primitives

mod stop_id;

pub use stop_id::StopId;
