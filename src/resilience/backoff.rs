//! Delay strategies used between retry attempts.

use async_trait::async_trait;
use std::time::Duration;

use crate::resilience::retries::SUBMIT_RETRY_DELAY;

/// Waits between two attempts.
///
/// Injected into the transfer executor so tests can run without real
/// wall-clock pauses.
#[async_trait]
pub trait Delay: Send + Sync {
    /// Pause after the `failures`-th failed attempt.
    async fn wait(&self, failures: u32);
}

/// Constant delay backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    duration: Duration,
}

impl FixedDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(SUBMIT_RETRY_DELAY)
    }
}

#[async_trait]
impl Delay for FixedDelay {
    async fn wait(&self, failures: u32) {
        tracing::debug!(
            failures = failures,
            delay_ms = self.duration.as_millis() as u64,
            "Waiting before retry"
        );
        tokio::time::sleep(self.duration).await;
    }
}
