use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pawquiz_core::engine::{score_selections, QuizEngine, Selections};
use pawquiz_core::model::{Question, QuizOption};
use pawquiz_core::scoring::round_percent;

fn make_questions(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| {
            Question::new(
                format!("q{i}"),
                format!("Question {i}"),
                (0..4)
                    .map(|o| QuizOption::new(format!("o{o}"), format!("Option {o}"), o == i % 4))
                    .collect(),
            )
        })
        .collect()
}

fn make_selections(n: usize) -> Selections {
    (0..n)
        .map(|i| (format!("q{i}"), format!("o{}", (i * 7) % 4)))
        .collect()
}

fn bench_round_percent(c: &mut Criterion) {
    c.bench_function("round_percent", |b| {
        b.iter(|| {
            for n in 0..100usize {
                black_box(round_percent(black_box(n), black_box(97)));
            }
        })
    });
}

fn bench_score_selections(c: &mut Criterion) {
    let questions = make_questions(1000);
    let selections = make_selections(1000);

    c.bench_function("score_selections_1000", |b| {
        b.iter(|| score_selections(black_box(&questions), black_box(&selections)))
    });
}

fn bench_full_session(c: &mut Criterion) {
    let questions = make_questions(100);

    c.bench_function("session_100_questions", |b| {
        b.iter(|| {
            let mut engine = QuizEngine::new(questions.clone());
            for i in 0..100 {
                engine.select_option(&format!("q{i}"), "o0");
                black_box(engine.progress());
                engine.go_next();
            }
            black_box(engine.score())
        })
    });
}

criterion_group!(
    benches,
    bench_round_percent,
    bench_score_selections,
    bench_full_session
);
criterion_main!(benches);
