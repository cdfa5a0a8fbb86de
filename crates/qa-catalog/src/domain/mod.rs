//! # Domain Layer - Knowledge Base Catalog
//!
//! ## Components
//!
//! - `value_objects`: identifiers, `VoteValue`, `Timestamp`
//! - `entities`: `Tag`, `Comment`, `Vote`
//! - `ledger`: `VoteLedger` (one vote per user, derived score)
//! - `user`: `User` aggregate and `UserRef` back reference
//! - `question` / `answer`: aggregate roots with their own locks
//! - `search`: `SearchQuery` matching
//! - `views`: serializable snapshots
//!
//! ## Ownership
//!
//! ```text
//! KnowledgeBase ──Arc──→ User, Question, Answer
//! User          ──Arc──→ authored Question / Answer / Comment
//! Question      ──Arc──→ Answer, Comment
//! Answer        ──Arc──→ Comment
//! Question / Answer / Comment / Vote ──Weak──→ User     (attribution, awards)
//! Answer        ──Weak──→ Question
//! ```

pub mod answer;
pub mod entities;
pub mod ledger;
pub mod question;
pub mod search;
pub mod user;
pub mod value_objects;
pub mod views;

pub use answer::*;
pub use entities::*;
pub use ledger::*;
pub use question::*;
pub use search::*;
pub use user::*;
pub use value_objects::*;
pub use views::*;
