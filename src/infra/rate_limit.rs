use std::{num::NonZeroU32, time::Duration};

use async_trait::async_trait;
use governor::{Quota, RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};

use super::InfraError;
use crate::app_error::{AppError, AppResult};

/// Trait for rate limiting implementations.
#[async_trait]
pub trait RateLimiterTrait: Send + Sync {
    /// Check the rate limit for a client key (usually the IP).
    /// Returns Ok(()) if within limits, Err(AppError::RateLimited) if exceeded.
    async fn check(&self, key: &str) -> AppResult<()>;
}

/// Stale keys are dropped once the limiter tracks more than this many.
const SWEEP_THRESHOLD: usize = 10_000;

type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

/// Keyed in-process limiter: a burst of `max_per_window` requests, refilled
/// evenly over the window.
pub struct InMemoryRateLimiter {
    limiter: KeyedLimiter,
}

impl InMemoryRateLimiter {
    pub fn new(window_secs: u64, max_per_window: u64) -> Result<Self, InfraError> {
        Self::with_window(Duration::from_secs(window_secs), max_per_window)
    }

    pub fn with_window(window: Duration, max_per_window: u64) -> Result<Self, InfraError> {
        let burst = u32::try_from(max_per_window)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| InfraError::ConfigInvalid {
                var: "RATE_LIMIT_PER_IP",
                reason: format!("{max_per_window} is not in 1..={}", u32::MAX),
            })?;

        let quota = Quota::with_period(window / burst.get())
            .ok_or_else(|| InfraError::ConfigInvalid {
                var: "RATE_LIMIT_WINDOW_SECS",
                reason: "window must be longer than zero".into(),
            })?
            .allow_burst(burst);

        Ok(Self {
            limiter: RateLimiter::keyed(quota),
        })
    }
}

#[async_trait]
impl RateLimiterTrait for InMemoryRateLimiter {
    async fn check(&self, key: &str) -> AppResult<()> {
        if self.limiter.len() > SWEEP_THRESHOLD {
            self.limiter.retain_recent();
        }

        self.limiter
            .check_key(&key.to_string())
            .map_err(|_| AppError::RateLimited)
    }
}
