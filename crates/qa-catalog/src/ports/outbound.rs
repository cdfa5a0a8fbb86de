//! Outbound (Driven) ports for the catalog.
//!
//! Identity and time are external collaborators injected into the
//! `KnowledgeBase`.

use crate::domain::Timestamp;
use std::fmt;

/// Kind of entity an identifier is minted for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Question,
    Answer,
    Comment,
    Tag,
}

impl EntityKind {
    /// Short prefix used by identifier adapters.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::User => "u",
            Self::Question => "q",
            Self::Answer => "a",
            Self::Comment => "c",
            Self::Tag => "t",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "user",
            Self::Question => "question",
            Self::Answer => "answer",
            Self::Comment => "comment",
            Self::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// Source of globally unique identifiers.
///
/// Implementations must be safe to call from many threads and never return
/// the same identifier twice within a process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, kind: EntityKind) -> String;
}

/// Time source for creation timestamps.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}
