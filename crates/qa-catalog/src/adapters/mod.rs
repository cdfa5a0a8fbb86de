//! Adapters implementing the outbound ports.

pub mod clock;
pub mod id_generator;

pub use clock::{FixedTimeSource, SystemTimeSource};
pub use id_generator::{SequentialIdGenerator, UuidIdGenerator};
