//! # Q&A Knowledge Base Catalog
//!
//! Concurrent in-memory domain model for a question-and-answer knowledge
//! base: users ask questions, post answers, comment, vote and accrue
//! reputation.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | One vote per (target, user) | `domain/ledger.rs` - `VoteLedger::cast()` |
//! | Vote value is +1 or -1 | `domain/value_objects.rs` - `VoteValue::try_from()` |
//! | Reputation >= 0 | `domain/user.rs` - `UserState::apply_delta()` |
//! | Answer identity at most once per question | `domain/question.rs` - `add_answer()` |
//! | Acceptance is monotonic | `domain/answer.rs` - `mark_as_accepted()` |
//!
//! ## Reputation Ledger
//!
//! Awards are applied per event and never recomputed. Replacing a vote
//! applies the new vote's award without reversing the old one:
//!
//! ```text
//! vote +1 ──→ author +5      ledger: [+1]   vote_count = +1
//! vote -1 ──→ author -5      ledger: [-1]   vote_count = -1
//! vote +1 ──→ author +5      ledger: [+1]   vote_count = +1
//! ```
//!
//! Every award, including those triggered by question/answer votes and
//! acceptance, is applied through the recipient's own lock.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  service.rs  - KnowledgeBase (catalog, KnowledgeBaseApi impl)   │
//! │  adapters/   - UuidIdGenerator, SequentialIdGenerator, clocks   │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - KnowledgeBaseApi, Commentable, Votable     │
//! │  ports/outbound.rs - IdGenerator, TimeSource                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/ - User, Question, Answer, Comment, Tag, VoteLedger     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use qa_catalog::{KnowledgeBase, KnowledgeBaseApi, Target};
//!
//! let kb = KnowledgeBase::with_defaults();
//! let asker = kb.create_user("asker", "asker@example.com");
//! let helper = kb.create_user("helper", "helper@example.com");
//!
//! let question = kb
//!     .ask_question(asker.id(), "Why RwLock?", "Readers vs writers", &["rust"])
//!     .unwrap();
//! let answer = kb
//!     .answer_question(helper.id(), question.id(), "Many readers, one writer")
//!     .unwrap();
//! kb.vote(asker.id(), &Target::Answer(answer.id().clone()), 1).unwrap();
//! kb.accept_answer(answer.id()).unwrap();
//!
//! assert_eq!(helper.reputation(), 10 + 10 + 15);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{FixedTimeSource, SequentialIdGenerator, SystemTimeSource, UuidIdGenerator};
pub use config::{ConfigError, KnowledgeBaseConfig, ReputationConfig, SearchConfig};
pub use domain::{
    Answer, AnswerId, AnswerView, CatalogStats, Comment, CommentId, CommentView, Question,
    QuestionId, QuestionView, Tag, TagId, Timestamp, User, UserId, UserRef, UserView, Vote,
    VoteLedger, VoteValue,
};
pub use error::{KnowledgeBaseError, KnowledgeBaseResult};
pub use ports::inbound::{Commentable, KnowledgeBaseApi, Target, Votable};
pub use ports::outbound::{EntityKind, IdGenerator, TimeSource};
pub use service::KnowledgeBase;
