use std::time::Duration;

/// Wait a certain number of milliseconds.
pub async fn tick(milliseconds: u64) {
    tokio::time::sleep(Duration::from_millis(milliseconds)).await;
}
