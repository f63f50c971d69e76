//! Classifier throughput benchmark (1K, 10K quizzes).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pulse_classify::SurveyClassifier;
use pulse_core::QuizMetadata;

fn make_quizzes(n: usize) -> Vec<QuizMetadata> {
    let titles = [
        "End of Course Evaluation - Fall 2024",
        "Module 3 Quiz",
        "Course Satisfaction Assessment",
        "Midterm Exam",
        "Generic Quiz About Nothing",
        "Student Experience Survey",
    ];
    (0..n)
        .map(|i| QuizMetadata {
            title: titles[i % titles.len()].to_string(),
            quiz_type: if i % 3 == 0 { "survey" } else { "assignment" }.to_string(),
            anonymous_submissions: i % 2 == 0,
            points_possible: (i % 5) as u32 * 25,
            published: true,
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let classifier = SurveyClassifier::new();
    let quizzes_1k = make_quizzes(1_000);
    let quizzes_10k = make_quizzes(10_000);

    c.bench_function("classify_1k_quizzes", |b| {
        b.iter(|| black_box(classifier.classify_batch(black_box(&quizzes_1k))))
    });

    c.bench_function("classify_10k_quizzes", |b| {
        b.iter(|| black_box(classifier.classify_batch(black_box(&quizzes_10k))))
    });

    c.bench_function("classify_10k_quizzes_parallel", |b| {
        b.iter(|| black_box(classifier.classify_batch_parallel(black_box(&quizzes_10k))))
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
