//! # Knowledge Base Benchmarks
//!
//! | Operation | Cost |
//! |-----------|------|
//! | vote (new voter) | O(n) ledger scan |
//! | vote (replacement) | O(n) ledger scan |
//! | add_comment | O(1) amortized |
//! | search_questions | O(questions) |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::sync::Arc;

use qa_catalog::{
    KnowledgeBase, KnowledgeBaseApi, KnowledgeBaseConfig, SequentialIdGenerator,
    SystemTimeSource, Target, User,
};

fn knowledge_base() -> KnowledgeBase {
    KnowledgeBase::new(
        KnowledgeBaseConfig::default(),
        Arc::new(SequentialIdGenerator::new()),
        Arc::new(SystemTimeSource),
    )
}

// ============================================================================
// Votes
// ============================================================================

fn bench_votes(c: &mut Criterion) {
    let mut group = c.benchmark_group("votes");

    for ledger_size in [10, 100, 1_000] {
        let kb = knowledge_base();
        let author = kb.create_user("author", "author@example.com");
        let question = kb.ask_question(author.id(), "t", "b", &[]).unwrap();
        let target = Target::Question(question.id().clone());
        let voters: Vec<Arc<User>> = (0..ledger_size)
            .map(|n| kb.create_user(&format!("v{n}"), "v@example.com"))
            .collect();
        for voter in &voters {
            kb.vote(voter.id(), &target, 1).unwrap();
        }

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("replace_vote", ledger_size),
            &voters,
            |b, voters| {
                let mut rng = rand::thread_rng();
                b.iter(|| {
                    let voter = &voters[rng.gen_range(0..voters.len())];
                    let value = if rng.gen_bool(0.5) { 1 } else { -1 };
                    black_box(kb.vote(voter.id(), &target, value).is_ok())
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// Comments
// ============================================================================

fn bench_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("comments");
    let kb = knowledge_base();
    let author = kb.create_user("author", "author@example.com");
    let question = kb.ask_question(author.id(), "t", "b", &[]).unwrap();
    let target = Target::Question(question.id().clone());

    group.bench_function("add_comment", |b| {
        b.iter(|| black_box(kb.add_comment(author.id(), &target, "+1").is_ok()))
    });

    group.finish();
}

// ============================================================================
// Search
// ============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for catalog_size in [100, 1_000, 10_000] {
        let kb = knowledge_base();
        let author = kb.create_user("author", "author@example.com");
        for n in 0..catalog_size {
            let tag = if n % 10 == 0 { "rust" } else { "misc" };
            kb.ask_question(author.id(), &format!("question {n}"), "body text", &[tag])
                .unwrap();
        }

        group.throughput(Throughput::Elements(catalog_size as u64));
        group.bench_with_input(
            BenchmarkId::new("search_by_tag", catalog_size),
            &kb,
            |b, kb| b.iter(|| black_box(kb.search_questions("rust").len())),
        );
        group.bench_with_input(
            BenchmarkId::new("search_miss", catalog_size),
            &kb,
            |b, kb| b.iter(|| black_box(kb.search_questions("nonexistent").len())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_votes, bench_comments, bench_search);
criterion_main!(benches);
