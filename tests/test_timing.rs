use std::time::Instant;

use tui_helpers::utils::timing::tick;

#[tokio::test]
async fn tick_waits_at_least_the_requested_time() {
    let start = Instant::now();
    tick(30).await;
    assert!(start.elapsed().as_millis() >= 30);
}

#[tokio::test]
async fn zero_tick_returns_immediately() {
    tick(0).await;
}
