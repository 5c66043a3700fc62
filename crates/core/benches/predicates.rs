use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use chronassert_core::assertions::CloseToWindow;
use chronassert_core::{CollectingReporter, Should};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 3, 10)
        .and_then(|date| date.and_hms_milli_opt(10, 0, 0, 0))
        .expect("benchmark fixture is valid")
}

fn predicate_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");
    group.sample_size(50).measurement_time(std::time::Duration::from_secs(5));

    let subject = sample();
    let nearby = subject + TimeDelta::milliseconds(15);

    group.bench_function("close_to_window_at_max", |b| {
        b.iter(|| {
            CloseToWindow::around(black_box(NaiveDateTime::MAX), black_box(TimeDelta::seconds(1)))
        });
    });

    group.bench_function("passing_chain", |b| {
        b.iter(|| {
            black_box(subject)
                .should()
                .be_close_to(black_box(nearby))
                .and()
                .have_year(2015)
                .and()
                .be_same_date_as(black_box(nearby));
        });
    });

    let reporter = Arc::new(CollectingReporter::new());
    group.bench_function("failing_component_with_reason", |b| {
        b.iter(|| {
            black_box(subject)
                .should_report_to(reporter.clone())
                .because("the {0} batch starts in {1}", ["nightly", "2016"])
                .have_year(2016);
            reporter.take()
        });
    });

    group.bench_function("range_before", |b| {
        b.iter(|| {
            black_box(subject)
                .should()
                .be_within(TimeDelta::minutes(1))
                .before(black_box(nearby));
        });
    });

    group.finish();
}

criterion_group!(core_benchmarks, predicate_benchmarks);
criterion_main!(core_benchmarks);
