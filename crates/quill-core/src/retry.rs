//! Failover retry budget and the sleep abstraction used between attempts.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::ValidationError;

pub const DEFAULT_MAX_RETRIES_PER_ADAPTER: u32 = 2;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1_500);

/// Configuration for the pipeline's failover loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts each adapter gets before the fallback catalog takes over.
    pub max_retries_per_adapter: u32,
    /// Fixed delay awaited before every retry.
    pub delay: Duration,
    /// Clear the shared failure count after a successful remote fetch.
    pub reset_failures_on_success: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries_per_adapter: DEFAULT_MAX_RETRIES_PER_ADAPTER,
            delay: DEFAULT_RETRY_DELAY,
            reset_failures_on_success: true,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with a fixed delay.
    pub fn fixed(delay: Duration, max_retries_per_adapter: u32) -> Result<Self, ValidationError> {
        if max_retries_per_adapter == 0 {
            return Err(ValidationError::ZeroRetryBudget);
        }

        Ok(Self {
            max_retries_per_adapter,
            delay,
            ..Self::default()
        })
    }

    pub fn with_reset_on_success(mut self, reset: bool) -> Self {
        self.reset_failures_on_success = reset;
        self
    }

    /// Failure count above which remote sources are abandoned.
    pub fn failure_threshold(&self, adapter_count: usize) -> u32 {
        let adapters = u32::try_from(adapter_count).unwrap_or(u32::MAX);
        adapters.saturating_mul(self.max_retries_per_adapter)
    }
}

/// Awaitable delay, injectable so tests never wait on a real clock.
pub trait Sleeper: Send + Sync {
    fn sleep<'a>(&'a self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep<'a>(&'a self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(tokio::time::sleep(duration))
    }
}
