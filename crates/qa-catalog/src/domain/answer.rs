//! Answer aggregate root.
//!
//! State machine for acceptance:
//! ```text
//! [OPEN] ──mark_as_accepted──→ [ACCEPTED]
//! ```
//! There is no transition back.

use super::entities::{Comment, Vote};
use super::ledger::VoteLedger;
use super::question::Question;
use super::user::{User, UserRef};
use super::value_objects::{AnswerId, QuestionId, Timestamp, VoteValue};
use super::views::AnswerView;
use crate::config::ReputationConfig;
use crate::error::{KnowledgeBaseError, KnowledgeBaseResult};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::{debug, info};

#[derive(Default)]
struct AnswerState {
    accepted: bool,
    comments: Vec<Arc<Comment>>,
    votes: VoteLedger,
}

/// An answer to a question.
pub struct Answer {
    id: AnswerId,
    body: String,
    author: UserRef,
    question_id: QuestionId,
    question: Weak<Question>,
    created_at: Timestamp,
    rewards: ReputationConfig,
    state: RwLock<AnswerState>,
}

impl Answer {
    pub fn new(
        id: AnswerId,
        author: &Arc<User>,
        question: &Arc<Question>,
        body: impl Into<String>,
        created_at: Timestamp,
        rewards: ReputationConfig,
    ) -> Self {
        Self {
            id,
            body: body.into(),
            author: UserRef::new(author),
            question_id: question.id().clone(),
            question: Arc::downgrade(question),
            created_at,
            rewards,
            state: RwLock::new(AnswerState::default()),
        }
    }

    pub fn id(&self) -> &AnswerId {
        &self.id
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

    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    /// The answered question, while the catalog still holds it.
    pub fn question(&self) -> Option<Arc<Question>> {
        self.question.upgrade()
    }

    /// Cast or replace `user`'s vote and award the answer author.
    ///
    /// Same cumulative per-event award as [`Question::vote`], with the
    /// answer multiplier.
    pub fn vote(&self, user: &Arc<User>, value: i64) -> KnowledgeBaseResult<()> {
        let value = VoteValue::try_from(value)?;
        {
            let mut state = self.state.write();
            if let Some(previous) = state.votes.cast(Vote::new(user, value)) {
                debug!(
                    answer_id = %self.id,
                    voter = %user.id(),
                    previous = previous.value().as_i64(),
                    current = value.as_i64(),
                    "answer vote replaced"
                );
            }
        }
        let delta = value.as_i64().saturating_mul(self.rewards.answer_vote_multiplier);
        self.author.award(delta);
        Ok(())
    }

    pub fn vote_count(&self) -> i64 {
        self.state.read().votes.score()
    }

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

    /// Flip the acceptance flag and award the author.
    ///
    /// # Errors
    /// `AlreadyAccepted` if the flag is already set.
    pub fn mark_as_accepted(&self) -> KnowledgeBaseResult<()> {
        {
            let mut state = self.state.write();
            if state.accepted {
                return Err(KnowledgeBaseError::AlreadyAccepted {
                    answer_id: self.id.to_string(),
                });
            }
            state.accepted = true;
        }
        info!(answer_id = %self.id, question_id = %self.question_id, "answer accepted");
        self.author.award(self.rewards.acceptance_award);
        Ok(())
    }

    pub fn is_accepted(&self) -> bool {
        self.state.read().accepted
    }

    pub fn view(&self) -> AnswerView {
        let state = self.state.read();
        AnswerView {
            id: self.id.clone(),
            question_id: self.question_id.clone(),
            author_id: self.author.id().clone(),
            body: self.body.clone(),
            created_at: self.created_at,
            accepted: state.accepted,
            vote_count: state.votes.score(),
            comments: state.comments.iter().map(|c| c.view()).collect(),
        }
    }
}

impl std::fmt::Debug for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Answer")
            .field("id", &self.id)
            .field("question_id", &self.question_id)
            .field("author", self.author.id())
            .finish_non_exhaustive()
    }
}
