//! Identifier adapters.

use crate::ports::outbound::{EntityKind, IdGenerator};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Random v4 UUIDs prefixed with the entity kind, e.g. `q-6f1c...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, kind: EntityKind) -> String {
        format!("{}-{}", kind.prefix(), Uuid::new_v4())
    }
}

/// Deterministic identifiers from a single process-wide counter,
/// e.g. `u-1`, `q-2`, `a-3`.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, kind: EntityKind) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", kind.prefix(), n)
    }
}
