//! Small value records: tags, comments and votes.

use super::user::{User, UserRef};
use super::value_objects::{CommentId, TagId, Timestamp, UserId, VoteValue};
use super::views::CommentView;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A label attached to a question.
///
/// Every asked question owns its own `Tag` values; the catalog-wide index
/// is keyed by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

impl Tag {
    pub fn new(id: TagId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A comment on a question or answer. Immutable after creation.
#[derive(Clone, Debug)]
pub struct Comment {
    id: CommentId,
    body: String,
    author: UserRef,
    created_at: Timestamp,
}

impl Comment {
    pub fn new(
        id: CommentId,
        author: &Arc<User>,
        body: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            body: body.into(),
            author: UserRef::new(author),
            created_at,
        }
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Non-owning reference to the author.
    pub fn author(&self) -> &UserRef {
        &self.author
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn view(&self) -> CommentView {
        CommentView {
            id: self.id.clone(),
            author_id: self.author.id().clone(),
            body: self.body.clone(),
            created_at: self.created_at,
        }
    }
}

/// One user's vote on a question or answer.
#[derive(Clone, Debug)]
pub struct Vote {
    voter: UserRef,
    value: VoteValue,
}

impl Vote {
    pub fn new(voter: &Arc<User>, value: VoteValue) -> Self {
        Self {
            voter: UserRef::new(voter),
            value,
        }
    }

    pub fn voter(&self) -> &UserRef {
        &self.voter
    }

    pub fn voter_id(&self) -> &UserId {
        self.voter.id()
    }

    pub fn value(&self) -> VoteValue {
        self.value
    }
}
