//! Error types for the knowledge base catalog.
//!
//! Every failure is local and recoverable by the caller. Validation always
//! runs before mutation, so an error never leaves an aggregate partially
//! updated.

use thiserror::Error;

/// Knowledge base errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnowledgeBaseError {
    /// A required actor or target is missing from the catalog
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Vote value outside {+1, -1}
    #[error("Invalid vote value {value}: must be either 1 or -1")]
    InvalidValue { value: i64 },

    /// Answer has already been accepted
    #[error("Answer {answer_id} is already accepted")]
    AlreadyAccepted { answer_id: String },
}

impl KnowledgeBaseError {
    /// Shorthand for an `InvalidArgument` naming the missing entity.
    pub fn missing(kind: &str, id: impl std::fmt::Display) -> Self {
        Self::InvalidArgument {
            reason: format!("{kind} {id} not found"),
        }
    }
}

/// Result type for knowledge base operations
pub type KnowledgeBaseResult<T> = Result<T, KnowledgeBaseError>;
