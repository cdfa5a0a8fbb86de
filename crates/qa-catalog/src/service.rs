//! Knowledge Base Service - the catalog
//!
//! Single lifetime owner of every user, question and answer. Orchestrates
//! cross-entity operations and delegates each mutation to the target
//! aggregate's own lock.
//!
//! ## Lock discipline
//!
//! - The catalog lock guards only the ID maps and the tag index.
//! - Constructors run before the catalog lock is taken.
//! - The catalog lock is released before any user, question or answer lock
//!   is acquired, so there is no lock-ordering cycle.

use crate::adapters::{SystemTimeSource, UuidIdGenerator};
use crate::config::KnowledgeBaseConfig;
use crate::domain::{
    Answer, AnswerId, CatalogStats, Comment, CommentId, Question, QuestionId, SearchQuery, Tag,
    TagId, User, UserId,
};
use crate::error::{KnowledgeBaseError, KnowledgeBaseResult};
use crate::ports::inbound::{Commentable, KnowledgeBaseApi, Target, Votable};
use crate::ports::outbound::{EntityKind, IdGenerator, TimeSource};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// ID-keyed entity maps plus the name-keyed tag index.
#[derive(Default)]
struct Catalog {
    users: HashMap<UserId, Arc<User>>,
    questions: HashMap<QuestionId, Arc<Question>>,
    answers: HashMap<AnswerId, Arc<Answer>>,
    /// Last writer wins on name collision.
    tags: HashMap<String, Tag>,
}

/// The knowledge base catalog.
pub struct KnowledgeBase {
    config: KnowledgeBaseConfig,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn TimeSource>,
    catalog: RwLock<Catalog>,
}

impl KnowledgeBase {
    /// Create a catalog with injected identity and time sources.
    pub fn new(
        config: KnowledgeBaseConfig,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            config,
            ids,
            clock,
            catalog: RwLock::new(Catalog::default()),
        }
    }

    /// Default configuration, UUID identifiers and system time.
    pub fn with_defaults() -> Self {
        Self::new(
            KnowledgeBaseConfig::default(),
            Arc::new(UuidIdGenerator),
            Arc::new(SystemTimeSource),
        )
    }

    pub fn config(&self) -> &KnowledgeBaseConfig {
        &self.config
    }

    pub fn user(&self, id: &UserId) -> Option<Arc<User>> {
        self.catalog.read().users.get(id).cloned()
    }

    pub fn question(&self, id: &QuestionId) -> Option<Arc<Question>> {
        self.catalog.read().questions.get(id).cloned()
    }

    pub fn answer(&self, id: &AnswerId) -> Option<Arc<Answer>> {
        self.catalog.read().answers.get(id).cloned()
    }

    /// The most recently indexed tag with exactly this name.
    pub fn tag(&self, name: &str) -> Option<Tag> {
        self.catalog.read().tags.get(name).cloned()
    }

    /// Indexed tag names, sorted.
    pub fn tag_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.catalog.read().tags.keys().cloned().collect();
        names.sort();
        names
    }

    /// Questions carrying a tag with this name (case-insensitive).
    pub fn questions_by_tag(&self, name: &str) -> Vec<Arc<Question>> {
        let candidates = self.all_questions();
        by_creation(
            candidates
                .into_iter()
                .filter(|q| q.has_tag(name))
                .collect(),
        )
    }

    pub fn stats(&self) -> CatalogStats {
        let catalog = self.catalog.read();
        CatalogStats {
            users: catalog.users.len(),
            questions: catalog.questions.len(),
            answers: catalog.answers.len(),
            tags: catalog.tags.len(),
        }
    }

    fn all_questions(&self) -> Vec<Arc<Question>> {
        self.catalog.read().questions.values().cloned().collect()
    }

    fn require_user(&self, id: &UserId) -> KnowledgeBaseResult<Arc<User>> {
        self.user(id)
            .ok_or_else(|| KnowledgeBaseError::missing("user", id))
    }

    fn require_question(&self, id: &QuestionId) -> KnowledgeBaseResult<Arc<Question>> {
        self.question(id)
            .ok_or_else(|| KnowledgeBaseError::missing("question", id))
    }

    fn require_answer(&self, id: &AnswerId) -> KnowledgeBaseResult<Arc<Answer>> {
        self.answer(id)
            .ok_or_else(|| KnowledgeBaseError::missing("answer", id))
    }

    fn resolve_commentable(&self, target: &Target) -> KnowledgeBaseResult<Arc<dyn Commentable>> {
        let catalog = self.catalog.read();
        let resolved = match target {
            Target::Question(id) => catalog
                .questions
                .get(id)
                .map(|q| Arc::clone(q) as Arc<dyn Commentable>),
            Target::Answer(id) => catalog
                .answers
                .get(id)
                .map(|a| Arc::clone(a) as Arc<dyn Commentable>),
        };
        resolved.ok_or_else(|| KnowledgeBaseError::InvalidArgument {
            reason: format!("{target} not found"),
        })
    }

    fn resolve_votable(&self, target: &Target) -> KnowledgeBaseResult<Arc<dyn Votable>> {
        let catalog = self.catalog.read();
        let resolved = match target {
            Target::Question(id) => catalog
                .questions
                .get(id)
                .map(|q| Arc::clone(q) as Arc<dyn Votable>),
            Target::Answer(id) => catalog
                .answers
                .get(id)
                .map(|a| Arc::clone(a) as Arc<dyn Votable>),
        };
        resolved.ok_or_else(|| KnowledgeBaseError::InvalidArgument {
            reason: format!("{target} not found"),
        })
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl KnowledgeBaseApi for KnowledgeBase {
    fn create_user(&self, name: &str, contact: &str) -> Arc<User> {
        let id = UserId(self.ids.next_id(EntityKind::User));
        let user = Arc::new(User::new(
            id.clone(),
            name,
            contact,
            self.config.reputation,
        ));

        self.catalog.write().users.insert(id, Arc::clone(&user));
        info!(user_id = %user.id(), name, "user created");
        user
    }

    fn ask_question(
        &self,
        author: &UserId,
        title: &str,
        body: &str,
        tag_names: &[&str],
    ) -> KnowledgeBaseResult<Arc<Question>> {
        let author = self.require_user(author)?;

        let tags = tag_names
            .iter()
            .map(|name| Tag::new(TagId(self.ids.next_id(EntityKind::Tag)), *name))
            .collect();
        let question = Arc::new(Question::new(
            QuestionId(self.ids.next_id(EntityKind::Question)),
            &author,
            title,
            body,
            tags,
            self.clock.now(),
            self.config.reputation,
        ));

        {
            let mut catalog = self.catalog.write();
            catalog
                .questions
                .insert(question.id().clone(), Arc::clone(&question));
            for tag in question.tags() {
                catalog.tags.insert(tag.name.clone(), tag);
            }
        }
        author.add_question(Arc::clone(&question));

        info!(
            question_id = %question.id(),
            author = %author.id(),
            tags = tag_names.len(),
            "question asked"
        );
        Ok(question)
    }

    fn answer_question(
        &self,
        author: &UserId,
        question: &QuestionId,
        body: &str,
    ) -> KnowledgeBaseResult<Arc<Answer>> {
        let author = self.require_user(author)?;
        let question = self.require_question(question)?;

        let answer = Arc::new(Answer::new(
            AnswerId(self.ids.next_id(EntityKind::Answer)),
            &author,
            &question,
            body,
            self.clock.now(),
            self.config.reputation,
        ));

        self.catalog
            .write()
            .answers
            .insert(answer.id().clone(), Arc::clone(&answer));
        question.add_answer(Arc::clone(&answer))?;
        author.add_answer(Arc::clone(&answer));

        info!(
            answer_id = %answer.id(),
            question_id = %question.id(),
            author = %author.id(),
            "question answered"
        );
        Ok(answer)
    }

    fn add_comment(
        &self,
        author: &UserId,
        target: &Target,
        body: &str,
    ) -> KnowledgeBaseResult<Arc<Comment>> {
        let author = self.require_user(author)?;
        let commentable = self.resolve_commentable(target)?;

        let comment = Arc::new(Comment::new(
            CommentId(self.ids.next_id(EntityKind::Comment)),
            &author,
            body,
            self.clock.now(),
        ));
        commentable.add_comment(Arc::clone(&comment))?;
        author.add_comment(Arc::clone(&comment));

        debug!(comment_id = %comment.id(), %target, author = %author.id(), "comment added");
        Ok(comment)
    }

    fn vote(&self, voter: &UserId, target: &Target, value: i64) -> KnowledgeBaseResult<()> {
        let voter = self.require_user(voter)?;
        let votable = self.resolve_votable(target)?;

        votable.vote(&voter, value)?;
        debug!(voter = %voter.id(), %target, value, "vote recorded");
        Ok(())
    }

    fn accept_answer(&self, answer: &AnswerId) -> KnowledgeBaseResult<()> {
        let answer = self.require_answer(answer)?;
        answer.mark_as_accepted()
    }

    fn search_questions(&self, query: &str) -> Vec<Arc<Question>> {
        let query = SearchQuery::parse(query);
        if query.is_empty() && !self.config.search.empty_query_matches_all {
            return Vec::new();
        }

        let candidates = self.all_questions();
        let results = by_creation(
            candidates
                .into_iter()
                .filter(|q| query.matches(q))
                .collect(),
        );
        debug!(query = query.as_str(), hits = results.len(), "questions searched");
        results
    }

    fn questions_by_user(&self, user: &UserId) -> Vec<Arc<Question>> {
        self.user(user)
            .map(|u| u.questions())
            .unwrap_or_default()
    }
}

/// Order by (creation timestamp, id) so repeated calls agree.
fn by_creation(mut questions: Vec<Arc<Question>>) -> Vec<Arc<Question>> {
    questions.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
    questions
}
