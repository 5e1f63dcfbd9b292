use std::time::{Duration, Instant};

use crate::debouncer::{Debouncer, DEFAULT_DEBOUNCE_MS};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn countdown_is_pending_until_settled() {
    let t0 = Instant::now();
    let mut d: Debouncer<i32> = Debouncer::new(100);

    assert!(!d.is_pending());
    d.debounce_at(1, t0);
    assert!(d.is_pending());

    assert!(!d.poll_at(t0 + ms(99)));
    assert!(d.is_pending());

    assert!(d.poll_at(t0 + ms(100)));
    assert!(!d.is_pending());
}

#[test]
fn zero_delay_settles_on_the_next_poll() {
    let t0 = Instant::now();
    let mut d: Debouncer<i32> = Debouncer::new(0);

    d.debounce_at(7, t0);
    assert!(d.poll_at(t0));
}

#[test]
fn time_remaining_is_none_without_a_countdown() {
    let d: Debouncer<i32> = Debouncer::new(100);
    assert_eq!(d.time_remaining(), None);
}

#[test]
fn time_remaining_counts_down_from_the_delay() {
    let mut d: Debouncer<i32> = Debouncer::new(500);
    d.debounce(1);
    let remaining = d.time_remaining().unwrap();
    assert!(remaining <= ms(500));
    assert!(remaining > ms(400));
}

#[test]
fn reset_cancels_the_countdown() {
    let t0 = Instant::now();
    let mut d: Debouncer<i32> = Debouncer::new(100);

    d.debounce_at(1, t0);
    d.reset();
    assert!(!d.is_pending());
    assert!(!d.poll_at(t0 + ms(1000)));
}

#[test]
fn default_uses_the_standard_window() {
    let d: Debouncer<i32> = Debouncer::default();
    assert_eq!(d.delay(), ms(DEFAULT_DEBOUNCE_MS));
}
