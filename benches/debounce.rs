use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::{Duration, Instant};
use tui_helpers::debouncer::Debouncer;

/// Simulate the patterns a user produces while typing a query
fn keystroke_burst(length: usize) -> Vec<String> {
    let mut patterns = Vec::with_capacity(length);
    let mut current = String::new();
    for i in 0..length {
        current.push(char::from(b'a' + (i % 26) as u8));
        patterns.push(current.clone());
    }
    patterns
}

fn benchmark_keystroke_bursts(c: &mut Criterion) {
    let burst_100 = keystroke_burst(100);
    let burst_1000 = keystroke_burst(1000);

    let mut group = c.benchmark_group("debounce_burst");

    group.bench_function("100_keystrokes", |b| {
        b.iter(|| {
            let mut d: Debouncer<String> = Debouncer::new(300);
            let mut now = Instant::now();
            for pattern in &burst_100 {
                now += Duration::from_millis(10);
                black_box(d.debounce_at(pattern.clone(), now));
            }
            black_box(d.poll_at(now + Duration::from_millis(300)))
        });
    });

    group.bench_function("1000_keystrokes", |b| {
        b.iter(|| {
            let mut d: Debouncer<String> = Debouncer::new(300);
            let mut now = Instant::now();
            for pattern in &burst_1000 {
                now += Duration::from_millis(10);
                black_box(d.debounce_at(pattern.clone(), now));
            }
            black_box(d.poll_at(now + Duration::from_millis(300)))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_keystroke_bursts);
criterion_main!(benches);
