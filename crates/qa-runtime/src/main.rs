//! # Knowledge Base Runtime
//!
//! Demo binary for the Q&A catalog.
//!
//! ## Startup Sequence
//!
//! 1. Install the tracing subscriber (`QA_LOG_LEVEL`)
//! 2. Load and validate configuration from the environment
//! 3. Build a `KnowledgeBase` with UUID identifiers and the system clock
//! 4. Run the reference scenario, then the concurrent comment burst
//! 5. Log the final question snapshot and catalog stats as JSON

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use qa_catalog::{KnowledgeBase, QuestionId, SystemTimeSource, UuidIdGenerator};
use qa_runtime::{load_config, log_level_from_env, run_comment_burst, run_reference_scenario};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level_from_env())
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config();
    config
        .catalog
        .validate()
        .context("invalid knowledge base configuration")?;
    info!(?config, "configuration loaded");

    let kb = Arc::new(KnowledgeBase::new(
        config.catalog,
        Arc::new(UuidIdGenerator),
        Arc::new(SystemTimeSource),
    ));

    let report = run_reference_scenario(&kb).context("reference scenario failed")?;
    info!(
        report = %serde_json::to_string(&report)?,
        "reference scenario report"
    );

    let question: QuestionId = report.question.id.clone();
    let comments = run_comment_burst(Arc::clone(&kb), question.clone(), config.comment_burst)
        .await
        .context("comment burst failed")?;

    if let Some(question) = kb.question(&question) {
        info!(
            comments,
            snapshot = %serde_json::to_string_pretty(&question.view())?,
            "question after burst"
        );
    }
    info!(stats = %serde_json::to_string(&kb.stats())?, "catalog stats");

    Ok(())
}
