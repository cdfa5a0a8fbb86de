//! Reference scenarios driven by the demo binary.

use qa_catalog::{
    KnowledgeBase, KnowledgeBaseApi, KnowledgeBaseError, QuestionId, QuestionView, Target,
    UserView,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Scenario failures.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Catalog(#[from] KnowledgeBaseError),

    #[error("comment task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Outcome of the ask / answer / vote / accept walkthrough.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub question: QuestionView,
    pub asker: UserView,
    pub helper: UserView,
    /// Questions returned by searching for the first tag.
    pub search_hits: usize,
}

/// Ask a tagged question, answer it, vote +1/-1/+1 on the question, accept
/// the answer and search by tag.
pub fn run_reference_scenario(kb: &KnowledgeBase) -> Result<ScenarioReport, ScenarioError> {
    let asker = kb.create_user("asker", "asker@example.com");
    let helper = kb.create_user("helper", "helper@example.com");

    let question = kb.ask_question(
        asker.id(),
        "Sharing state between threads",
        "What is the simplest safe way to share a counter?",
        &["go", "concurrency"],
    )?;
    let answer = kb.answer_question(helper.id(), question.id(), "try locks")?;

    let target = Target::Question(question.id().clone());
    for value in [1, -1, 1] {
        kb.vote(helper.id(), &target, value)?;
    }
    kb.add_comment(asker.id(), &Target::Answer(answer.id().clone()), "thanks!")?;
    kb.accept_answer(answer.id())?;

    let search_hits = kb.search_questions("go").len();
    info!(
        question_id = %question.id(),
        vote_count = question.vote_count(),
        search_hits,
        "reference scenario complete"
    );

    Ok(ScenarioReport {
        question: question.view(),
        asker: asker.view(),
        helper: helper.view(),
        search_hits,
    })
}

/// Register `callers` users and have each comment on `question` from its
/// own blocking task. Returns the question's final comment count.
pub async fn run_comment_burst(
    kb: Arc<KnowledgeBase>,
    question: QuestionId,
    callers: usize,
) -> Result<usize, ScenarioError> {
    let target = Target::Question(question.clone());
    let mut tasks = Vec::with_capacity(callers);

    for n in 0..callers {
        let kb = Arc::clone(&kb);
        let target = target.clone();
        tasks.push(tokio::task::spawn_blocking(move || {
            let user = kb.create_user(&format!("commenter-{n}"), &format!("c{n}@example.com"));
            kb.add_comment(user.id(), &target, &format!("comment #{n}"))
        }));
    }

    for task in tasks {
        task.await??;
    }

    let count = kb
        .question(&question)
        .map(|q| q.comments().len())
        .ok_or_else(|| KnowledgeBaseError::missing("question", &question))?;
    info!(question_id = %question, callers, comments = count, "comment burst complete");
    Ok(count)
}
