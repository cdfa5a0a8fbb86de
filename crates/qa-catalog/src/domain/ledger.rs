//! Vote ledger embedded in every votable aggregate.
//!
//! INVARIANT: at most one vote per user. Casting again removes the user's
//! previous vote and appends the new one, so the ledger stays ordered by
//! most recent cast.

use super::entities::Vote;

/// Ordered one-vote-per-user records with a derived score.
#[derive(Clone, Debug, Default)]
pub struct VoteLedger {
    votes: Vec<Vote>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `vote`, replacing any earlier vote by the same user.
    ///
    /// Returns the replaced vote, if any.
    pub fn cast(&mut self, vote: Vote) -> Option<Vote> {
        let previous = self
            .votes
            .iter()
            .position(|v| v.voter_id() == vote.voter_id())
            .map(|index| self.votes.remove(index));
        self.votes.push(vote);
        previous
    }

    /// Sum of the current vote values.
    pub fn score(&self) -> i64 {
        self.votes.iter().map(|v| v.value().as_i64()).sum()
    }

    /// Defensive copy of the ledger.
    pub fn votes(&self) -> Vec<Vote> {
        self.votes.clone()
    }
}
