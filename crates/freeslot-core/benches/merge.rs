//! Benchmark for the busy-interval merge sweep.

use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use freeslot_core::{merge_busy, Event, Horizon};

/// Sorted synthetic events: `per_day` short meetings per horizon day, with
/// staggered starts so many overlap their predecessor.
fn synthetic_events(per_day: u64, days: u32) -> (Vec<Event>, Horizon) {
    let first = NaiveDate::from_ymd_opt(2021, 7, 5).unwrap();
    let horizon = Horizon::consecutive(first, days);

    let mut events = Vec::new();
    for (d, &day) in horizon.days().iter().enumerate() {
        for i in 0..per_day {
            let offset = i % 2; // stagger starts so some events overlap
            let midnight = day.and_hms_opt(0, 0, 0).unwrap();
            let start = midnight + chrono::Duration::seconds((i * 30 + offset * 10) as i64);
            events.push(Event {
                id: d as u64 * per_day + i,
                user_id: i % 5,
                start,
                end: start + chrono::Duration::seconds(45),
            });
        }
    }
    (events, horizon)
}

fn bench_merge(c: &mut Criterion) {
    let (events, horizon) = synthetic_events(2000, 3);
    c.bench_function("merge_busy/6k_events", |b| {
        b.iter(|| merge_busy(black_box(&events), black_box(&horizon)).unwrap())
    });
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
