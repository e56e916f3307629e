// benches/normalize.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use jobdash::config::consts::{CORE_COLUMNS, SAMPLE_CAP};
use jobdash::core::normalize::normalize;
use jobdash::core::sample::build_summary_input;
use jobdash::record::JobRecord;

use serde_json::json;

fn synthetic_records(n: usize) -> Vec<JobRecord> {
    (0..n)
        .map(|i| {
            let v = json!({
                "title": format!("Engineer {i}"),
                "company": format!("Company {}", i % 37),
                "location": "Pune",
                "date_posted": "2024-01-01",
                "job_url": format!("https://jobs.example/{i}"),
                "description": if i % 3 == 0 {
                    format!("Looking for engineer {i} with Rust and SQL experience")
                } else {
                    String::new()
                },
                "site": "indeed",
                "salary_min": 100_000 + i,
            });
            v.as_object().unwrap().clone()
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let records = synthetic_records(10_000);

    c.bench_function("normalize_10k", |b| {
        b.iter(|| {
            let view = normalize(black_box(&records), black_box(CORE_COLUMNS));
            black_box(view.row_count())
        })
    });

    c.bench_function("sample_10k", |b| {
        b.iter(|| {
            let input = build_summary_input(black_box(&records), SAMPLE_CAP);
            black_box(input.map(|s| s.len()))
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
