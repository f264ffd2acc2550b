//! One-shot timer for the staged reveal of subjects.

use std::time::Duration;

/// Resolve after `delay`.
pub async fn reveal_timer(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_waits_for_delay() {
        let start = tokio::time::Instant::now();
        reveal_timer(Duration::from_millis(50)).await;
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
