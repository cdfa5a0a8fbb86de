//! Serializable read-only snapshots for wire shims.

use super::value_objects::{AnswerId, CommentId, QuestionId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub contact: String,
    pub reputation: i64,
    pub question_count: usize,
    pub answer_count: usize,
    pub comment_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: CommentId,
    pub author_id: UserId,
    pub body: String,
    pub created_at: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerView {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub author_id: UserId,
    pub body: String,
    pub created_at: Timestamp,
    pub accepted: bool,
    pub vote_count: i64,
    pub comments: Vec<CommentView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub author_id: UserId,
    pub title: String,
    pub body: String,
    pub created_at: Timestamp,
    pub tags: Vec<String>,
    pub vote_count: i64,
    pub answers: Vec<AnswerView>,
    pub comments: Vec<CommentView>,
}

/// Catalog-wide entity counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub users: usize,
    pub questions: usize,
    pub answers: usize,
    /// Distinct tag names in the index.
    pub tags: usize,
}
