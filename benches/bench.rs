// Criterion benchmarks for College Chancer

use college_chancer::config::CollegeEntry;
use college_chancer::core::{evaluate, Chancer};
use college_chancer::models::{CollegeCriteria, Extracurriculars, ScoreRange, StudentProfile};
use college_chancer::services::{parse_stats_page, StaticCriteria};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_profile() -> StudentProfile {
    StudentProfile {
        gpa: 3.85,
        sat: 1480,
        act: 33,
        extracurriculars: Extracurriculars::Scored(14),
    }
}

fn create_table(size: usize) -> StaticCriteria {
    let entries: Vec<CollegeEntry> = (0..size)
        .map(|i| {
            let criteria = CollegeCriteria {
                gpa: ScoreRange::new(3.0 + (i % 9) as f64 * 0.1, 4.0),
                sat: ScoreRange::new(1000 + (i % 50) as u32 * 10, 1600),
                act: ScoreRange::new(20 + (i % 15) as u32, 36),
                requires_extracurriculars: i % 2 == 0,
                min_extracurricular_score: (i % 20) as u32,
            };
            CollegeEntry::new(format!("College {}", i), &criteria)
        })
        .collect();

    StaticCriteria::from_entries(entries.iter().map(|e| (e.name.clone(), e.criteria())))
        .expect("generated table is valid")
}

fn bench_evaluate(c: &mut Criterion) {
    let profile = create_profile();
    let criteria = CollegeCriteria::fallback();

    c.bench_function("evaluate", |b| {
        b.iter(|| evaluate(black_box(&profile), black_box(&criteria)));
    });
}

fn bench_assess_all(c: &mut Criterion) {
    let chancer = Chancer::default();
    let profile = create_profile();

    let mut group = c.benchmark_group("assess_all");

    for size in [3, 10, 50].iter() {
        let table = create_table(*size);

        group.bench_with_input(BenchmarkId::new("colleges", size), size, |b, _| {
            b.iter(|| chancer.assess_all(black_box(&table), black_box(&profile)));
        });
    }

    group.finish();
}

fn bench_parse_stats_page(c: &mut Criterion) {
    let page = r#"<html><body>
        <span id="gpaMin">3.7</span><span id="gpaMax">4.0</span>
        <span id="satMin">1350</span><span id="satMax">1530</span>
        <span id="actMin">30</span><span id="actMax">35</span>
        <span id="requiresExtracurriculars">yes</span><span id="minExtraScore">9</span>
    </body></html>"#;

    c.bench_function("parse_stats_page", |b| {
        b.iter(|| parse_stats_page(black_box(page)));
    });
}

criterion_group!(benches, bench_evaluate, bench_assess_all, bench_parse_stats_page);

criterion_main!(benches);
