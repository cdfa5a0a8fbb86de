//! # Concurrency
//!
//! Many OS threads hammering one catalog. Every test checks that no update
//! is lost and that the reputation ledger stays exact, which requires every
//! award to go through the recipient's lock.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    use qa_catalog::{
        KnowledgeBase, KnowledgeBaseApi, KnowledgeBaseConfig, KnowledgeBaseError,
        SequentialIdGenerator, SystemTimeSource, Target, User,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn knowledge_base() -> KnowledgeBase {
        KnowledgeBase::new(
            KnowledgeBaseConfig::default(),
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(SystemTimeSource),
        )
    }

    fn users(kb: &KnowledgeBase, count: usize) -> Vec<Arc<User>> {
        (0..count)
            .map(|n| kb.create_user(&format!("user-{n}"), &format!("user-{n}@example.com")))
            .collect()
    }

    // =============================================================================
    // COMMENTS
    // =============================================================================

    #[test]
    fn test_fifty_concurrent_comments_on_one_question() {
        let kb = knowledge_base();
        let asker = kb.create_user("asker", "asker@example.com");
        let question = kb.ask_question(asker.id(), "t", "b", &[]).unwrap();
        let commenters = users(&kb, 50);
        let target = Target::Question(question.id().clone());

        thread::scope(|s| {
            for user in &commenters {
                let (kb, target) = (&kb, &target);
                s.spawn(move || {
                    kb.add_comment(user.id(), target, "me too").unwrap();
                });
            }
        });

        let comments = question.comments();
        assert_eq!(comments.len(), 50);
        let ids: HashSet<_> = comments.iter().map(|c| c.id().clone()).collect();
        assert_eq!(ids.len(), 50);
        for user in &commenters {
            assert_eq!(user.comments().len(), 1);
            assert_eq!(user.reputation(), 2);
        }
    }

    #[test]
    fn test_concurrent_comments_from_one_user_are_all_awarded() {
        let kb = knowledge_base();
        let asker = kb.create_user("asker", "asker@example.com");
        let helper = kb.create_user("helper", "helper@example.com");
        let question = kb.ask_question(asker.id(), "t", "b", &[]).unwrap();
        let answer = kb.answer_question(helper.id(), question.id(), "a").unwrap();
        let targets = [
            Target::Question(question.id().clone()),
            Target::Answer(answer.id().clone()),
        ];

        thread::scope(|s| {
            for n in 0..40 {
                let (kb, asker, target) = (&kb, &asker, &targets[n % 2]);
                s.spawn(move || {
                    kb.add_comment(asker.id(), target, "ping").unwrap();
                });
            }
        });

        assert_eq!(question.comments().len(), 20);
        assert_eq!(answer.comments().len(), 20);
        assert_eq!(asker.comments().len(), 40);
        assert_eq!(asker.reputation(), 5 + 40 * 2);
    }

    // =============================================================================
    // VOTES
    // =============================================================================

    #[test]
    fn test_concurrent_distinct_voters_are_all_counted() {
        let kb = knowledge_base();
        let author = kb.create_user("author", "author@example.com");
        let question = kb.ask_question(author.id(), "t", "b", &[]).unwrap();
        let voters = users(&kb, 64);
        let target = Target::Question(question.id().clone());

        thread::scope(|s| {
            for voter in &voters {
                let (kb, target) = (&kb, &target);
                s.spawn(move || kb.vote(voter.id(), target, 1).unwrap());
            }
        });

        assert_eq!(question.vote_count(), 64);
        assert_eq!(question.votes().len(), 64);
        assert_eq!(author.reputation(), 5 + 64 * 5);
    }

    #[test]
    fn test_concurrent_revotes_keep_one_entry_per_voter() {
        let kb = knowledge_base();
        let asker = kb.create_user("asker", "asker@example.com");
        let helper = kb.create_user("helper", "helper@example.com");
        let question = kb.ask_question(asker.id(), "t", "b", &[]).unwrap();
        let answer = kb.answer_question(helper.id(), question.id(), "a").unwrap();
        let voters = users(&kb, 8);
        let target = Target::Answer(answer.id().clone());

        thread::scope(|s| {
            for voter in &voters {
                for round in 0..10 {
                    let (kb, target) = (&kb, &target);
                    let value = if round % 2 == 0 { 1 } else { -1 };
                    s.spawn(move || kb.vote(voter.id(), target, value).unwrap());
                }
            }
        });

        let votes = answer.votes();
        assert_eq!(votes.len(), 8);
        let voter_ids: HashSet<_> = votes.iter().map(|v| v.voter_id().clone()).collect();
        assert_eq!(voter_ids.len(), 8);
        let score: i64 = votes.iter().map(|v| v.value().as_i64()).sum();
        assert_eq!(answer.vote_count(), score);
    }

    #[test]
    fn test_cross_target_awards_to_one_author_are_not_lost() {
        let kb = knowledge_base();
        let author = kb.create_user("author", "author@example.com");
        let questions: Vec<_> = (0..16)
            .map(|n| {
                kb.ask_question(author.id(), &format!("q{n}"), "b", &[])
                    .unwrap()
            })
            .collect();
        let voters = users(&kb, 4);

        // Votes on different questions race on the shared author while the
        // author keeps asking new questions.
        thread::scope(|s| {
            for question in &questions {
                for voter in &voters {
                    let (kb, target) = (&kb, Target::Question(question.id().clone()));
                    s.spawn(move || kb.vote(voter.id(), &target, 1).unwrap());
                }
            }
            for n in 0..8 {
                let (kb, author) = (&kb, &author);
                s.spawn(move || {
                    kb.ask_question(author.id(), &format!("late-{n}"), "b", &[])
                        .unwrap();
                });
            }
        });

        assert_eq!(author.questions().len(), 24);
        assert_eq!(author.reputation(), 24 * 5 + 16 * 4 * 5);
    }

    // =============================================================================
    // ANSWERS AND ACCEPTANCE
    // =============================================================================

    #[test]
    fn test_concurrent_acceptance_succeeds_exactly_once() {
        let kb = knowledge_base();
        let asker = kb.create_user("asker", "asker@example.com");
        let helper = kb.create_user("helper", "helper@example.com");
        let question = kb.ask_question(asker.id(), "t", "b", &[]).unwrap();
        let answer = kb.answer_question(helper.id(), question.id(), "a").unwrap();
        let accepted = AtomicUsize::new(0);
        let rejected = AtomicUsize::new(0);

        thread::scope(|s| {
            for _ in 0..16 {
                let (kb, answer, accepted, rejected) = (&kb, &answer, &accepted, &rejected);
                s.spawn(move || match kb.accept_answer(answer.id()) {
                    Ok(()) => accepted.fetch_add(1, Ordering::SeqCst),
                    Err(KnowledgeBaseError::AlreadyAccepted { .. }) => {
                        rejected.fetch_add(1, Ordering::SeqCst)
                    }
                    Err(other) => panic!("unexpected error: {other:?}"),
                });
            }
        });

        assert_eq!(accepted.load(Ordering::SeqCst), 1);
        assert_eq!(rejected.load(Ordering::SeqCst), 15);
        assert_eq!(helper.reputation(), 10 + 15);
    }

    #[test]
    fn test_concurrent_answers_and_searches() {
        let kb = knowledge_base();
        let asker = kb.create_user("asker", "asker@example.com");
        let question = kb
            .ask_question(asker.id(), "Lock ordering", "b", &["locks"])
            .unwrap();
        let helpers = users(&kb, 32);

        thread::scope(|s| {
            for helper in &helpers {
                let (kb, question) = (&kb, &question);
                s.spawn(move || {
                    kb.answer_question(helper.id(), question.id(), "use one order")
                        .unwrap();
                });
            }
            for _ in 0..8 {
                let kb = &kb;
                s.spawn(move || {
                    for _ in 0..20 {
                        assert_eq!(kb.search_questions("locks").len(), 1);
                        let _ = kb.stats();
                    }
                });
            }
        });

        assert_eq!(question.answer_count(), 32);
        assert_eq!(kb.stats().answers, 32);
        for helper in &helpers {
            assert_eq!(helper.answers().len(), 1);
            assert_eq!(helper.reputation(), 10);
        }
    }

    // =============================================================================
    // RUNTIME BURST
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_runtime_comment_burst_on_blocking_pool() {
        let kb = Arc::new(knowledge_base());
        let asker = kb.create_user("asker", "asker@example.com");
        let question = kb.ask_question(asker.id(), "t", "b", &[]).unwrap();

        let count = qa_runtime::run_comment_burst(Arc::clone(&kb), question.id().clone(), 50)
            .await
            .unwrap();

        assert_eq!(count, 50);
        assert_eq!(kb.stats().users, 51);
    }
}
