//! Port definitions (interfaces to infrastructure)

mod transit_port;

#[cfg(test)]
pub use transit_port::MockTransitPort;
pub use transit_port::TransitPort;
