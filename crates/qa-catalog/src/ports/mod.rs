//! Ports (hexagonal boundaries) for the catalog.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
