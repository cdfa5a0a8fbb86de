//! User aggregate and the reputation protocol.
//!
//! Reputation is a stored running total mutated only by delta application.
//! Every mutation, including vote and acceptance awards triggered from other
//! aggregates, goes through the user's own lock.
//!
//! INVARIANT: reputation >= 0 (negative results clamp to zero).

use super::answer::Answer;
use super::entities::Comment;
use super::question::Question;
use super::value_objects::UserId;
use super::views::UserView;
use crate::config::ReputationConfig;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

/// Mutable part of a user, guarded by the user's lock.
#[derive(Default)]
struct UserState {
    reputation: i64,
    questions: Vec<Arc<Question>>,
    answers: Vec<Arc<Answer>>,
    comments: Vec<Arc<Comment>>,
}

impl UserState {
    fn apply_delta(&mut self, delta: i64) {
        self.reputation = self.reputation.saturating_add(delta).max(0);
    }
}

/// A registered user.
pub struct User {
    id: UserId,
    name: String,
    contact: String,
    rewards: ReputationConfig,
    state: RwLock<UserState>,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        contact: impl Into<String>,
        rewards: ReputationConfig,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            contact: contact.into(),
            rewards,
            state: RwLock::new(UserState::default()),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Apply a reputation delta, clamping the total at zero.
    pub fn update_reputation(&self, delta: i64) {
        let mut state = self.state.write();
        state.apply_delta(delta);
        debug!(user_id = %self.id, delta, reputation = state.reputation, "reputation updated");
    }

    /// Record an authored question and apply the question award.
    pub fn add_question(&self, question: Arc<Question>) {
        let mut state = self.state.write();
        state.questions.push(question);
        state.apply_delta(self.rewards.question_award);
    }

    /// Record an authored answer and apply the answer award.
    pub fn add_answer(&self, answer: Arc<Answer>) {
        let mut state = self.state.write();
        state.answers.push(answer);
        state.apply_delta(self.rewards.answer_award);
    }

    /// Record an authored comment and apply the comment award.
    pub fn add_comment(&self, comment: Arc<Comment>) {
        let mut state = self.state.write();
        state.comments.push(comment);
        state.apply_delta(self.rewards.comment_award);
    }

    pub fn reputation(&self) -> i64 {
        self.state.read().reputation
    }

    /// Authored questions in insertion order.
    pub fn questions(&self) -> Vec<Arc<Question>> {
        self.state.read().questions.clone()
    }

    /// Authored answers in insertion order.
    pub fn answers(&self) -> Vec<Arc<Answer>> {
        self.state.read().answers.clone()
    }

    /// Authored comments in insertion order.
    pub fn comments(&self) -> Vec<Arc<Comment>> {
        self.state.read().comments.clone()
    }

    pub fn view(&self) -> UserView {
        let state = self.state.read();
        UserView {
            id: self.id.clone(),
            name: self.name.clone(),
            contact: self.contact.clone(),
            reputation: state.reputation,
            question_count: state.questions.len(),
            answer_count: state.answers.len(),
            comment_count: state.comments.len(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("reputation", &self.reputation())
            .finish_non_exhaustive()
    }
}

/// Non-owning back reference to a user.
///
/// Used for attribution and reputation awards only. The catalog owns the
/// user's lifetime.
#[derive(Clone, Debug)]
pub struct UserRef {
    id: UserId,
    handle: Weak<User>,
}

impl UserRef {
    pub fn new(user: &Arc<User>) -> Self {
        Self {
            id: user.id.clone(),
            handle: Arc::downgrade(user),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn upgrade(&self) -> Option<Arc<User>> {
        self.handle.upgrade()
    }

    /// Apply a reputation delta to the referenced user through its lock.
    pub fn award(&self, delta: i64) {
        match self.upgrade() {
            Some(user) => user.update_reputation(delta),
            None => warn!(user_id = %self.id, delta, "reputation award dropped: user released"),
        }
    }
}
