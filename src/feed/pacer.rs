//! Process-wide outbound request pacing
//!
//! The upstream price source enforces a request-rate ceiling; every outbound
//! call acquires the pacer first so a large registry cannot trip the quota.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum spacing between outbound requests
///
/// Callers serialize on the internal lock: a waiter sleeps out the residual
/// gap while holding it, so concurrent callers are spaced one after another.
pub struct RequestPacer {
    min_spacing: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RequestPacer {
    pub fn new(min_spacing: Duration) -> Self {
        Self {
            min_spacing,
            last_request: Mutex::new(None),
        }
    }

    /// Wait until the minimum spacing since the previous request has passed
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_spacing {
                tokio::time::sleep(self.min_spacing - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_acquire_is_immediate() {
        let pacer = RequestPacer::new(Duration::from_secs(60));
        let start = Instant::now();
        pacer.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_consecutive_acquires_are_spaced() {
        let spacing = Duration::from_millis(50);
        let pacer = RequestPacer::new(spacing);

        let mut stamps = Vec::new();
        for _ in 0..3 {
            pacer.acquire().await;
            stamps.push(Instant::now());
        }

        for pair in stamps.windows(2) {
            assert!(pair[1] - pair[0] >= spacing);
        }
    }

    #[tokio::test]
    async fn test_concurrent_acquires_serialize() {
        use std::sync::Arc;

        let spacing = Duration::from_millis(40);
        let pacer = Arc::new(RequestPacer::new(spacing));
        let start = Instant::now();

        let mut handles = Vec::new();
        for _ in 0..3 {
            let pacer = Arc::clone(&pacer);
            handles.push(tokio::spawn(async move {
                pacer.acquire().await;
                Instant::now()
            }));
        }

        let mut stamps = Vec::new();
        for handle in handles {
            stamps.push(handle.await.unwrap());
        }
        stamps.sort();

        for pair in stamps.windows(2) {
            assert!(pair[1] - pair[0] >= spacing);
        }
        // Three paced calls take at least two full gaps
        assert!(start.elapsed() >= spacing * 2);
    }
}
