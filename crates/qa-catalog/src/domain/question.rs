//! Question aggregate root.
//!
//! Owns its answers, comments and vote ledger behind one read/write lock.
//! Title, body and tags are fixed at construction and read without locking.
//!
//! INVARIANT: an answer identity appears at most once in `answers`.

use super::answer::Answer;
use super::entities::{Comment, Tag, Vote};
use super::ledger::VoteLedger;
use super::user::{User, UserRef};
use super::value_objects::{QuestionId, Timestamp, VoteValue};
use super::views::QuestionView;
use crate::config::ReputationConfig;
use crate::error::KnowledgeBaseResult;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

#[derive(Default)]
struct QuestionState {
    answers: Vec<Arc<Answer>>,
    comments: Vec<Arc<Comment>>,
    votes: VoteLedger,
}

/// A posted question.
pub struct Question {
    id: QuestionId,
    title: String,
    body: String,
    author: UserRef,
    created_at: Timestamp,
    tags: Vec<Tag>,
    rewards: ReputationConfig,
    state: RwLock<QuestionState>,
}

impl Question {
    pub fn new(
        id: QuestionId,
        author: &Arc<User>,
        title: impl Into<String>,
        body: impl Into<String>,
        tags: Vec<Tag>,
        created_at: Timestamp,
        rewards: ReputationConfig,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            author: UserRef::new(author),
            created_at,
            tags,
            rewards,
            state: RwLock::new(QuestionState::default()),
        }
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn author(&self) -> &UserRef {
        &self.author
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Attach an answer. Adding an identity that is already present is a
    /// successful no-op.
    pub fn add_answer(&self, answer: Arc<Answer>) -> KnowledgeBaseResult<()> {
        let mut state = self.state.write();
        if state.answers.iter().any(|a| a.id() == answer.id()) {
            return Ok(());
        }
        state.answers.push(answer);
        Ok(())
    }

    /// Cast or replace `user`'s vote and award the question author.
    ///
    /// The award is applied on every vote event. Replacing a vote does not
    /// reverse the award of the vote it replaces, so the author's reputation
    /// accumulates per event while `vote_count` reflects only the ledger.
    pub fn vote(&self, user: &Arc<User>, value: i64) -> KnowledgeBaseResult<()> {
        let value = VoteValue::try_from(value)?;
        {
            let mut state = self.state.write();
            if let Some(previous) = state.votes.cast(Vote::new(user, value)) {
                debug!(
                    question_id = %self.id,
                    voter = %user.id(),
                    previous = previous.value().as_i64(),
                    current = value.as_i64(),
                    "question vote replaced"
                );
            }
        }
        let delta = value.as_i64().saturating_mul(self.rewards.question_vote_multiplier);
        self.author.award(delta);
        Ok(())
    }

    /// Sum of the current vote values.
    pub fn vote_count(&self) -> i64 {
        self.state.read().votes.score()
    }

    /// Defensive copy of the vote ledger.
    pub fn votes(&self) -> Vec<Vote> {
        self.state.read().votes.votes()
    }

    pub fn add_comment(&self, comment: Arc<Comment>) -> KnowledgeBaseResult<()> {
        self.state.write().comments.push(comment);
        Ok(())
    }

    pub fn comments(&self) -> Vec<Arc<Comment>> {
        self.state.read().comments.clone()
    }

    /// Answers in the order they were attached.
    pub fn answers(&self) -> Vec<Arc<Answer>> {
        self.state.read().answers.clone()
    }

    pub fn answer_count(&self) -> usize {
        self.state.read().answers.len()
    }

    /// Tags in ask-time order.
    pub fn tags(&self) -> Vec<Tag> {
        self.tags.clone()
    }

    /// Exact, case-insensitive tag name match.
    pub fn has_tag(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.tags.iter().any(|t| t.name.to_lowercase() == name)
    }

    pub fn view(&self) -> QuestionView {
        let (answers, comments, vote_count) = {
            let state = self.state.read();
            (
                state.answers.clone(),
                state.comments.clone(),
                state.votes.score(),
            )
        };
        // Answer views take the answer locks; the question lock is released by now.
        QuestionView {
            id: self.id.clone(),
            author_id: self.author.id().clone(),
            title: self.title.clone(),
            body: self.body.clone(),
            created_at: self.created_at,
            tags: self.tags.iter().map(|t| t.name.clone()).collect(),
            vote_count,
            answers: answers.iter().map(|a| a.view()).collect(),
            comments: comments.iter().map(|c| c.view()).collect(),
        }
    }
}

impl std::fmt::Debug for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Question")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("author", self.author.id())
            .finish_non_exhaustive()
    }
}
