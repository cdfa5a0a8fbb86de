//! # Runtime Configuration
//!
//! Defaults come from `KnowledgeBaseConfig::default()`; every field can be
//! overridden from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `QA_LOG_LEVEL` | max tracing level (`trace`..`error`) |
//! | `QA_QUESTION_AWARD` | `reputation.question_award` |
//! | `QA_ANSWER_AWARD` | `reputation.answer_award` |
//! | `QA_COMMENT_AWARD` | `reputation.comment_award` |
//! | `QA_QUESTION_VOTE_MULTIPLIER` | `reputation.question_vote_multiplier` |
//! | `QA_ANSWER_VOTE_MULTIPLIER` | `reputation.answer_vote_multiplier` |
//! | `QA_ACCEPTANCE_AWARD` | `reputation.acceptance_award` |
//! | `QA_EMPTY_QUERY_MATCHES_ALL` | `search.empty_query_matches_all` |
//! | `QA_COMMENT_BURST` | concurrent commenters in the demo burst |
//!
//! Unparseable values are logged and ignored.

use qa_catalog::KnowledgeBaseConfig;
use std::str::FromStr;
use tracing::{warn, Level};

/// Default number of concurrent commenters in the demo burst.
pub const DEFAULT_COMMENT_BURST: usize = 50;

/// Complete runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Maximum tracing level.
    pub log_level: Level,
    /// Catalog configuration.
    pub catalog: KnowledgeBaseConfig,
    /// Concurrent commenters in the demo burst.
    pub comment_burst: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            catalog: KnowledgeBaseConfig::default(),
            comment_burst: DEFAULT_COMMENT_BURST,
        }
    }
}

/// Load configuration from the process environment.
pub fn load_config() -> RuntimeConfig {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration from an arbitrary key lookup.
pub fn load_config_from(lookup: impl Fn(&str) -> Option<String>) -> RuntimeConfig {
    let mut config = RuntimeConfig::default();

    if let Some(raw) = lookup("QA_LOG_LEVEL") {
        match Level::from_str(raw.trim()) {
            Ok(level) => config.log_level = level,
            Err(_) => warn!(value = %raw, "QA_LOG_LEVEL is not a tracing level"),
        }
    }

    let reputation = &mut config.catalog.reputation;
    override_with(&lookup, "QA_QUESTION_AWARD", &mut reputation.question_award);
    override_with(&lookup, "QA_ANSWER_AWARD", &mut reputation.answer_award);
    override_with(&lookup, "QA_COMMENT_AWARD", &mut reputation.comment_award);
    override_with(
        &lookup,
        "QA_QUESTION_VOTE_MULTIPLIER",
        &mut reputation.question_vote_multiplier,
    );
    override_with(
        &lookup,
        "QA_ANSWER_VOTE_MULTIPLIER",
        &mut reputation.answer_vote_multiplier,
    );
    override_with(&lookup, "QA_ACCEPTANCE_AWARD", &mut reputation.acceptance_award);
    override_with(
        &lookup,
        "QA_EMPTY_QUERY_MATCHES_ALL",
        &mut config.catalog.search.empty_query_matches_all,
    );
    override_with(&lookup, "QA_COMMENT_BURST", &mut config.comment_burst);

    config
}

/// Initial log level, read before the subscriber exists.
pub fn log_level_from_env() -> Level {
    std::env::var("QA_LOG_LEVEL")
        .ok()
        .and_then(|raw| Level::from_str(raw.trim()).ok())
        .unwrap_or(Level::INFO)
}

fn override_with<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut T) {
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *slot = value,
            Err(_) => warn!(key, value = %raw, "ignoring unparseable override"),
        }
    }
}
