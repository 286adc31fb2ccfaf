//! Async data-fetch stub.

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

/// Artificial latency before [`fetch_data`] resolves.
pub const FETCH_DELAY: Duration = Duration::from_millis(100);

/// Resolves a fixed in-memory list after [`FETCH_DELAY`].
///
/// Stands in for a remote call. Dropping the future before it completes
/// simply discards it.
pub async fn fetch_data() -> Vec<i32> {
    sleep(FETCH_DELAY).await;
    let data = vec![1, 2, 3];
    debug!(len = data.len(), "fetch resolved");
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{Instant, timeout};

    #[tokio::test]
    async fn fetch_resolves_non_empty_list() {
        let data = fetch_data().await;
        assert!(!data.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_waits_for_delay() {
        let start = Instant::now();
        let data = fetch_data().await;

        assert_eq!(data, vec![1, 2, 3]);
        assert!(start.elapsed() >= FETCH_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_times_out_before_delay() {
        let result = timeout(FETCH_DELAY / 2, fetch_data()).await;
        assert!(result.is_err());
    }
}
