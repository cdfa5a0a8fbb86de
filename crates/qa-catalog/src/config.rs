//! # Catalog Configuration
//!
//! Reputation awards and search behaviour. All values have defaults that
//! reproduce the canonical award table:
//!
//! | Event | Recipient | Award |
//! |-------|-----------|-------|
//! | Ask question | asker | +5 |
//! | Post answer | answerer | +10 |
//! | Post comment | commenter | +2 |
//! | Vote on question | question author | value × 5 |
//! | Vote on answer | answer author | value × 10 |
//! | Accept answer | answer author | +15 |

use thiserror::Error;

/// Complete catalog configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KnowledgeBaseConfig {
    /// Reputation award table.
    pub reputation: ReputationConfig,
    /// Search behaviour.
    pub search: SearchConfig,
}

impl KnowledgeBaseConfig {
    /// Reject award tables that would make authorship or acceptance cost
    /// reputation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.reputation;
        let fields = [
            ("question_award", r.question_award),
            ("answer_award", r.answer_award),
            ("comment_award", r.comment_award),
            ("question_vote_multiplier", r.question_vote_multiplier),
            ("answer_vote_multiplier", r.answer_vote_multiplier),
            ("acceptance_award", r.acceptance_award),
        ];
        for (field, value) in fields {
            if value < 0 {
                return Err(ConfigError::NegativeAward { field, value });
            }
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An award or multiplier is negative.
    #[error("Reputation setting {field} must not be negative (got {value})")]
    NegativeAward { field: &'static str, value: i64 },
}

/// Reputation award table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReputationConfig {
    /// Awarded to the author when a question is asked.
    pub question_award: i64,
    /// Awarded to the author when an answer is posted.
    pub answer_award: i64,
    /// Awarded to the author when a comment is posted.
    pub comment_award: i64,
    /// Multiplied by the vote value on every question vote event.
    pub question_vote_multiplier: i64,
    /// Multiplied by the vote value on every answer vote event.
    pub answer_vote_multiplier: i64,
    /// Awarded to the answer author on acceptance.
    pub acceptance_award: i64,
}

impl Default for ReputationConfig {
    fn default() -> Self {
        Self {
            question_award: 5,
            answer_award: 10,
            comment_award: 2,
            question_vote_multiplier: 5,
            answer_vote_multiplier: 10,
            acceptance_award: 15,
        }
    }
}

/// Search behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Whether the empty string query returns every question.
    /// When `false` it returns nothing.
    pub empty_query_matches_all: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            empty_query_matches_all: true,
        }
    }
}
