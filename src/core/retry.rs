//! Bounded retry with backoff and a fallback once the budget is spent.
//!
//! Every upstream call made by the facade goes through [`RetryPolicy::call`].
//! Only failures for which [`FacadeError::is_transient`] holds are retried;
//! anything else is returned to the caller on the first attempt.

use crate::utils::error::{FacadeError, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Backoff {
    Fixed {
        delay_ms: u64,
    },
    Exponential {
        initial_delay_ms: u64,
        multiplier: f64,
        max_delay_ms: u64,
    },
}

impl Backoff {
    pub fn none() -> Self {
        Backoff::Fixed { delay_ms: 0 }
    }

    /// Wait before retry number `retry` (1 for the first retry).
    pub fn delay_for(&self, retry: u32) -> Duration {
        match *self {
            Backoff::Fixed { delay_ms } => Duration::from_millis(delay_ms),
            Backoff::Exponential {
                initial_delay_ms,
                multiplier,
                max_delay_ms,
            } => {
                let exponent = retry.saturating_sub(1).min(i32::MAX as u32) as i32;
                let scaled = initial_delay_ms as f64 * multiplier.powi(exponent);
                // `as` saturates on overflow and maps NaN to zero.
                let millis = (scaled as u64).min(max_delay_ms);
                Duration::from_millis(millis)
            }
        }
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Backoff::Fixed {
            delay_ms: DEFAULT_BACKOFF_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts including the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default)]
    pub backoff: Backoff,
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: Backoff::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Runs `operation` until it succeeds, fails non-transiently, or the
    /// attempt budget is spent. In the last case `fallback` receives the
    /// final transient error and decides the outcome.
    pub async fn call<T, Op, Fut, Fb>(
        &self,
        operation_name: &str,
        mut operation: Op,
        fallback: Fb,
    ) -> Result<T>
    where
        Op: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
        Fb: FnOnce(FacadeError) -> Result<T>,
    {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match operation().await {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::info!("{} succeeded on attempt {}", operation_name, attempt);
                    }
                    return Ok(value);
                }
                Err(e) if !e.is_transient() => return Err(e),
                Err(e) if attempt >= max_attempts => {
                    tracing::warn!(
                        "Fallback triggered for {} after {} attempts due to: {}",
                        operation_name,
                        attempt,
                        e
                    );
                    return fallback(e);
                }
                Err(e) => {
                    let delay = self.config.backoff.delay_for(attempt);
                    tracing::warn!(
                        "{} attempt {}/{} failed: {}; retrying in {:?}",
                        operation_name,
                        attempt,
                        max_attempts,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
