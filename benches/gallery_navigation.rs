// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the gallery hot paths.
//!
//! Measures the performance of:
//! - Translation lookup (plain and with arguments)
//! - Viewer navigation with transitions disabled
//! - Building a localized project record

use atelier::catalog::Catalog;
use atelier::gallery::{Message, ScrollLock, State};
use atelier::i18n::I18n;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;

fn bench_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation");
    let i18n = I18n::default();

    group.bench_function("tr", |b| {
        b.iter(|| black_box(i18n.tr(black_box("gallery-view-project"))));
    });

    group.bench_function("tr_with_args", |b| {
        b.iter(|| {
            black_box(i18n.tr_with_args(
                "viewer-counter",
                &[("current", "07".to_string()), ("total", "35".to_string())],
            ))
        });
    });

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let i18n = I18n::default();
    let catalog = Catalog::embedded().expect("embedded catalog");
    let record = catalog.record(1, &i18n).expect("project 1");

    let mut viewer = State::new(ScrollLock::new(), Duration::ZERO);
    viewer.open(record.clone()).expect("viewer opens");

    group.bench_function("next", |b| {
        b.iter(|| black_box(viewer.handle_message(Message::Next)));
    });

    group.bench_function("jump_to", |b| {
        let mut target = 0;
        b.iter(|| {
            target = (target + 7) % record.images.len();
            black_box(viewer.handle_message(Message::JumpTo(target)))
        });
    });

    group.bench_function("record", |b| {
        b.iter(|| black_box(catalog.record(black_box(4), &i18n)));
    });

    group.finish();
}

criterion_group!(benches, bench_translation, bench_navigation);
criterion_main!(benches);
