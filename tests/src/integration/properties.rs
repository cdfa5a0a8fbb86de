//! # Ledger Properties
//!
//! Seeded random operation sequences replayed against the catalog and a
//! plain model. After every step:
//!
//! - each (target, voter) pair holds at most one ledger entry
//! - `vote_count` equals the sum of stored values
//! - reputation equals the clamped running sum of every award event

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use qa_catalog::{
        FixedTimeSource, KnowledgeBase, KnowledgeBaseApi, KnowledgeBaseConfig,
        KnowledgeBaseError, SequentialIdGenerator, Target, User, UserId,
    };

    const SEEDS: [u64; 4] = [7, 42, 1_337, 9_001];

    fn knowledge_base() -> KnowledgeBase {
        KnowledgeBase::new(
            KnowledgeBaseConfig::default(),
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(FixedTimeSource::new(0)),
        )
    }

    /// Apply a delta the way the catalog does: saturate, then clamp at zero.
    fn apply(reputation: &mut i64, delta: i64) {
        *reputation = reputation.saturating_add(delta).max(0);
    }

    // =============================================================================
    // RANDOM VOTE SEQUENCES
    // =============================================================================

    #[test]
    fn test_random_votes_match_model() {
        for seed in SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let kb = knowledge_base();

            let asker = kb.create_user("asker", "asker@example.com");
            let helper = kb.create_user("helper", "helper@example.com");
            let voters: Vec<Arc<User>> = (0..6)
                .map(|n| kb.create_user(&format!("v{n}"), "v@example.com"))
                .collect();
            let question = kb.ask_question(asker.id(), "t", "b", &[]).unwrap();
            let answer = kb.answer_question(helper.id(), question.id(), "a").unwrap();

            let mut asker_rep = 5;
            let mut helper_rep = 10;
            let mut question_votes: HashMap<UserId, i64> = HashMap::new();
            let mut answer_votes: HashMap<UserId, i64> = HashMap::new();

            for _ in 0..200 {
                let voter = &voters[rng.gen_range(0..voters.len())];
                let value = if rng.gen_bool(0.5) { 1 } else { -1 };

                if rng.gen_bool(0.5) {
                    kb.vote(voter.id(), &Target::Question(question.id().clone()), value)
                        .unwrap();
                    question_votes.insert(voter.id().clone(), value);
                    apply(&mut asker_rep, value * 5);
                } else {
                    kb.vote(voter.id(), &Target::Answer(answer.id().clone()), value)
                        .unwrap();
                    answer_votes.insert(voter.id().clone(), value);
                    apply(&mut helper_rep, value * 10);
                }

                assert_eq!(question.votes().len(), question_votes.len(), "seed {seed}");
                assert_eq!(answer.votes().len(), answer_votes.len(), "seed {seed}");
                assert_eq!(question.vote_count(), question_votes.values().sum::<i64>());
                assert_eq!(answer.vote_count(), answer_votes.values().sum::<i64>());
                assert_eq!(asker.reputation(), asker_rep, "seed {seed}");
                assert_eq!(helper.reputation(), helper_rep, "seed {seed}");
            }

            for voter in &voters {
                assert!(voter.reputation() >= 0);
                assert_eq!(voter.reputation(), 0);
            }
        }
    }

    #[test]
    fn test_random_vote_values_outside_range_are_rejected() {
        let mut rng = StdRng::seed_from_u64(SEEDS[0]);
        let kb = knowledge_base();
        let asker = kb.create_user("asker", "asker@example.com");
        let voter = kb.create_user("voter", "voter@example.com");
        let question = kb.ask_question(asker.id(), "t", "b", &[]).unwrap();
        let target = Target::Question(question.id().clone());

        for _ in 0..100 {
            let value: i64 = rng.gen_range(-1_000..1_000);
            let result = kb.vote(voter.id(), &target, value);
            if value == 1 || value == -1 {
                assert!(result.is_ok());
            } else {
                assert_eq!(result, Err(KnowledgeBaseError::InvalidValue { value }));
            }
        }

        assert!(question.votes().len() <= 1);
        assert!(asker.reputation() >= 0);
    }

    // =============================================================================
    // RANDOM REPUTATION DELTAS
    // =============================================================================

    #[test]
    fn test_random_reputation_deltas_never_go_negative() {
        for seed in SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let kb = knowledge_base();
            let user = kb.create_user("user", "user@example.com");
            let mut model = 0;

            for _ in 0..500 {
                let delta = match rng.gen_range(0..10) {
                    0 => i64::MIN,
                    1 => i64::MAX,
                    _ => rng.gen_range(-50..50),
                };
                user.update_reputation(delta);
                apply(&mut model, delta);

                assert!(user.reputation() >= 0, "seed {seed}");
                assert_eq!(user.reputation(), model, "seed {seed}");
            }
        }
    }
}
