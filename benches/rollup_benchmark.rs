use acd_reports::api::{ActivityRecord, Granularity, TableQuery};
use acd_reports::services;
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_records(count: usize) -> Vec<ActivityRecord> {
    (0..count)
        .map(|i| {
            let day = (i % 28) as u32 + 1;
            let month = (i / 28 % 12) as u32 + 1;
            let hour = (i % 10) as u32 + 8;
            ActivityRecord {
                date: format!("{:02}-{:02}-2024", day, month),
                time: format!("{}:00", hour),
                queued: (i % 40) as u32,
                presented: (i % 40) as u32 + 2,
                answered: (i % 35) as u32,
                answered_within_60s: (i % 30) as u32,
                abandoned: (i % 5) as u32,
                bounced: Some(2),
                longest_wait: format!("00:{:02}:{:02}", i % 10, i % 60),
                longest_answer: "00:00:45".to_string(),
                longest_abandoned: "00:01:30".to_string(),
                percent_answered: (i % 100) as u32,
            }
        })
        .collect()
}

fn bench_rollup(c: &mut Criterion) {
    let mut group = c.benchmark_group("rollup");
    let records = synthetic_records(5000);

    group.bench_function("compute_summary_5k", |b| {
        b.iter(|| services::compute_summary(black_box(&records)));
    });

    group.finish();
}

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");
    let records = synthetic_records(5000);

    group.bench_function("daily_5k", |b| {
        b.iter(|| services::compute_series(black_box(&records), Granularity::Daily));
    });

    group.bench_function("monthly_5k", |b| {
        b.iter(|| services::compute_series(black_box(&records), Granularity::Monthly));
    });

    group.finish();
}

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");
    let records = synthetic_records(5000);
    let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();

    let params = TableQuery {
        search: Some("12".to_string()),
        sort_field: Some(acd_reports::api::SortField::Date),
        page: 1,
        page_size: 10,
        ..TableQuery::default()
    };

    group.bench_function("query_5k_search_sorted", |b| {
        b.iter(|| services::query_table(black_box(&records), black_box(&params), today));
    });

    group.finish();
}

criterion_group!(benches, bench_rollup, bench_series, bench_table);
criterion_main!(benches);
