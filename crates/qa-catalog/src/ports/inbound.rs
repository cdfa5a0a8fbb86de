//! Driving Ports (API - Inbound)
//!
//! `KnowledgeBaseApi` is the surface a CLI or service shim calls into.
//! `Commentable` and `Votable` are the capabilities a comment or vote
//! target must expose; `Question` and `Answer` implement both.

use crate::domain::{
    Answer, AnswerId, Comment, Question, QuestionId, User, UserId, Vote,
};
use crate::error::KnowledgeBaseResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Anything that accepts and lists comments.
pub trait Commentable: Send + Sync {
    /// Append a comment under the target's own lock.
    fn add_comment(&self, comment: Arc<Comment>) -> KnowledgeBaseResult<()>;

    /// Defensive copy of the comments in insertion order.
    fn comments(&self) -> Vec<Arc<Comment>>;
}

/// Anything that carries a vote ledger.
pub trait Votable: Send + Sync {
    /// Cast or replace `user`'s vote.
    ///
    /// # Errors
    /// `InvalidValue` if `value` is not +1 or -1.
    fn vote(&self, user: &Arc<User>, value: i64) -> KnowledgeBaseResult<()>;

    /// Sum of the current vote values.
    fn vote_count(&self) -> i64;

    /// Defensive copy of the ledger.
    fn votes(&self) -> Vec<Vote>;
}

impl Commentable for Question {
    fn add_comment(&self, comment: Arc<Comment>) -> KnowledgeBaseResult<()> {
        Question::add_comment(self, comment)
    }

    fn comments(&self) -> Vec<Arc<Comment>> {
        Question::comments(self)
    }
}

impl Votable for Question {
    fn vote(&self, user: &Arc<User>, value: i64) -> KnowledgeBaseResult<()> {
        Question::vote(self, user, value)
    }

    fn vote_count(&self) -> i64 {
        Question::vote_count(self)
    }

    fn votes(&self) -> Vec<Vote> {
        Question::votes(self)
    }
}

impl Commentable for Answer {
    fn add_comment(&self, comment: Arc<Comment>) -> KnowledgeBaseResult<()> {
        Answer::add_comment(self, comment)
    }

    fn comments(&self) -> Vec<Arc<Comment>> {
        Answer::comments(self)
    }
}

impl Votable for Answer {
    fn vote(&self, user: &Arc<User>, value: i64) -> KnowledgeBaseResult<()> {
        Answer::vote(self, user, value)
    }

    fn vote_count(&self) -> i64 {
        Answer::vote_count(self)
    }

    fn votes(&self) -> Vec<Vote> {
        Answer::votes(self)
    }
}

/// Addresses a comment or vote target in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Target {
    Question(QuestionId),
    Answer(AnswerId),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question(id) => write!(f, "question {id}"),
            Self::Answer(id) => write!(f, "answer {id}"),
        }
    }
}

impl From<QuestionId> for Target {
    fn from(id: QuestionId) -> Self {
        Self::Question(id)
    }
}

impl From<AnswerId> for Target {
    fn from(id: AnswerId) -> Self {
        Self::Answer(id)
    }
}

/// Primary knowledge base API.
///
/// Actors and targets are addressed by identifier. An identifier the
/// catalog does not know is treated as an absent argument and fails with
/// `InvalidArgument`.
pub trait KnowledgeBaseApi: Send + Sync {
    /// Register a user. Always succeeds.
    fn create_user(&self, name: &str, contact: &str) -> Arc<User>;

    /// Post a question with the given tag names.
    ///
    /// # Errors
    /// `InvalidArgument` if `author` is unknown.
    fn ask_question(
        &self,
        author: &UserId,
        title: &str,
        body: &str,
        tag_names: &[&str],
    ) -> KnowledgeBaseResult<Arc<Question>>;

    /// Post an answer to `question`.
    ///
    /// # Errors
    /// `InvalidArgument` if `author` or `question` is unknown.
    fn answer_question(
        &self,
        author: &UserId,
        question: &QuestionId,
        body: &str,
    ) -> KnowledgeBaseResult<Arc<Answer>>;

    /// Comment on a question or answer.
    ///
    /// # Errors
    /// `InvalidArgument` if `author` or `target` is unknown.
    fn add_comment(
        &self,
        author: &UserId,
        target: &Target,
        body: &str,
    ) -> KnowledgeBaseResult<Arc<Comment>>;

    /// Vote on a question or answer.
    ///
    /// # Errors
    /// `InvalidArgument` if `voter` or `target` is unknown, `InvalidValue`
    /// if `value` is not +1 or -1.
    fn vote(&self, voter: &UserId, target: &Target, value: i64) -> KnowledgeBaseResult<()>;

    /// Accept an answer.
    ///
    /// # Errors
    /// `InvalidArgument` if `answer` is unknown, `AlreadyAccepted` on a
    /// second acceptance.
    fn accept_answer(&self, answer: &AnswerId) -> KnowledgeBaseResult<()>;

    /// Substring search over title/body plus exact tag match.
    fn search_questions(&self, query: &str) -> Vec<Arc<Question>>;

    /// Questions authored by `user`, in insertion order. Empty for an
    /// unknown user.
    fn questions_by_user(&self, user: &UserId) -> Vec<Arc<Question>>;
}
