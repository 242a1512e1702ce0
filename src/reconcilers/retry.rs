// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Retry logic with exponential backoff for Kubernetes and CloudFront API calls.
//!
//! This module provides utilities for retrying transient API errors (throttling,
//! 5xx, unavailable service) with exponential backoff, while failing fast on
//! permanent errors. The original error is returned unchanged so callers keep
//! their typed error handling.

use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

use crate::cloudfront::ApiError;

/// Maximum total time to spend retrying (5 minutes)
const MAX_ELAPSED_TIME_SECS: u64 = 300;

/// Initial retry interval (100ms)
const INITIAL_INTERVAL_MILLIS: u64 = 100;

/// Maximum interval between retries (30 seconds)
const MAX_INTERVAL_SECS: u64 = 30;

/// Backoff multiplier (exponential growth factor)
const BACKOFF_MULTIPLIER: f64 = 2.0;

/// Randomization factor to prevent thundering herd (±10%)
const RANDOMIZATION_FACTOR: f64 = 0.1;

/// CloudFront retry initial interval (200ms); CloudFront throttles per account
const CLOUDFRONT_INITIAL_INTERVAL_MILLIS: u64 = 200;

/// CloudFront retry maximum interval (20 seconds)
const CLOUDFRONT_MAX_INTERVAL_SECS: u64 = 20;

/// CloudFront retry maximum elapsed time (2 minutes)
const CLOUDFRONT_MAX_ELAPSED_TIME_SECS: u64 = 120;

/// Simple exponential backoff implementation.
///
/// Provides exponential backoff with randomization (jitter) to prevent thundering herd.
pub struct ExponentialBackoff {
    /// Current interval duration
    pub current_interval: Duration,
    /// Initial interval duration
    pub initial_interval: Duration,
    /// Maximum interval duration
    pub max_interval: Duration,
    /// Maximum total elapsed time
    pub max_elapsed_time: Option<Duration>,
    /// Backoff multiplier (typically 2.0 for doubling)
    pub multiplier: f64,
    /// Randomization factor (e.g., 0.1 for ±10%)
    pub randomization_factor: f64,
    /// Start time for tracking total elapsed time
    start_time: Instant,
}

impl ExponentialBackoff {
    /// Create a new exponential backoff with specified parameters.
    fn new(
        initial_interval: Duration,
        max_interval: Duration,
        max_elapsed_time: Option<Duration>,
        multiplier: f64,
        randomization_factor: f64,
    ) -> Self {
        Self {
            current_interval: initial_interval,
            initial_interval,
            max_interval,
            max_elapsed_time,
            multiplier,
            randomization_factor,
            start_time: Instant::now(),
        }
    }

    /// Get the next backoff interval, or None if max elapsed time exceeded.
    pub fn next_backoff(&mut self) -> Option<Duration> {
        if let Some(max_elapsed) = self.max_elapsed_time {
            if self.start_time.elapsed() >= max_elapsed {
                return None;
            }
        }

        let interval = self.current_interval;
        let jittered = self.apply_jitter(interval);

        let next = interval.as_secs_f64() * self.multiplier;
        self.current_interval = Duration::from_secs_f64(next).min(self.max_interval);

        Some(jittered)
    }

    /// Apply randomization (jitter) to an interval.
    fn apply_jitter(&self, interval: Duration) -> Duration {
        if self.randomization_factor == 0.0 {
            return interval;
        }

        let secs = interval.as_secs_f64();
        let delta = secs * self.randomization_factor;
        let min = secs - delta;
        let max = secs + delta;

        let mut rng = rand::thread_rng();
        let jittered = rng.gen_range(min..=max);

        Duration::from_secs_f64(jittered.max(0.0))
    }
}

/// Create default exponential backoff configuration for Kubernetes API retries.
///
/// # Configuration
///
/// - **Initial interval**: 100ms
/// - **Max interval**: 30 seconds
/// - **Max elapsed time**: 5 minutes total
/// - **Multiplier**: 2.0 (exponential growth)
/// - **Randomization**: ±10% (prevents thundering herd)
#[must_use]
pub fn default_backoff() -> ExponentialBackoff {
    ExponentialBackoff::new(
        Duration::from_millis(INITIAL_INTERVAL_MILLIS),
        Duration::from_secs(MAX_INTERVAL_SECS),
        Some(Duration::from_secs(MAX_ELAPSED_TIME_SECS)),
        BACKOFF_MULTIPLIER,
        RANDOMIZATION_FACTOR,
    )
}

/// Create exponential backoff configuration for CloudFront API retries.
///
/// # Configuration
///
/// - **Initial interval**: 200ms
/// - **Max interval**: 20 seconds
/// - **Max elapsed time**: 2 minutes total
/// - **Multiplier**: 2.0 (exponential growth)
/// - **Randomization**: ±10% (prevents thundering herd)
///
/// # Retry Schedule
///
/// 1. 200ms
/// 2. 400ms
/// 3. 800ms
/// 4. 1.6s
/// 5. 3.2s
/// 6. 6.4s
/// 7. 12.8s
/// 8. 20s (capped at max interval)
///    9-12. 20s intervals until 2 minutes elapsed
#[must_use]
pub fn cloudfront_backoff() -> ExponentialBackoff {
    ExponentialBackoff::new(
        Duration::from_millis(CLOUDFRONT_INITIAL_INTERVAL_MILLIS),
        Duration::from_secs(CLOUDFRONT_MAX_INTERVAL_SECS),
        Some(Duration::from_secs(CLOUDFRONT_MAX_ELAPSED_TIME_SECS)),
        BACKOFF_MULTIPLIER,
        RANDOMIZATION_FACTOR,
    )
}

/// Errors that know whether the failed call may be retried.
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

impl Retryable for kube::Error {
    /// Rate limiting (429), server errors (5xx) and connection errors are
    /// retryable; every other client error is permanent.
    fn is_retryable(&self) -> bool {
        match self {
            kube::Error::Api(api_err) => {
                api_err.code == 429 || (api_err.code >= 500 && api_err.code < 600)
            }
            kube::Error::Service(_) => true,
            _ => false,
        }
    }
}

impl Retryable for ApiError {
    fn is_retryable(&self) -> bool {
        ApiError::is_retryable(self)
    }
}

/// Retry an API call with exponential backoff.
///
/// Automatically retries on transient errors and fails immediately on permanent
/// ones. When retries run out, the last error is returned.
///
/// # Arguments
///
/// * `backoff` - Retry schedule, [`default_backoff`] or [`cloudfront_backoff`]
/// * `operation` - Async function that performs the API call
/// * `operation_name` - Human-readable name for logging (e.g., "`GetDistribution` E1")
///
/// # Errors
///
/// Returns the error of the last attempt if:
/// - A non-retryable error is encountered
/// - The backoff is exhausted
///
/// # Example
///
/// ```no_run
/// use kube::{Api, Client};
/// use cloudfront_controller::crd::Distribution;
/// use cloudfront_controller::reconcilers::retry::{default_backoff, retry_api_call};
///
/// # async fn example() -> Result<(), kube::Error> {
/// let client = Client::try_default().await?;
/// let api: Api<Distribution> = Api::namespaced(client, "default");
///
/// let distribution = retry_api_call(
///     default_backoff(),
///     || async { api.get("my-distribution").await },
///     "get distribution my-distribution",
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn retry_api_call<T, E, F, Fut>(
    mut backoff: ExponentialBackoff,
    mut operation: F,
    operation_name: &str,
) -> Result<T, E>
where
    E: Retryable + std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
{
    let start_time = Instant::now();
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(
                        operation = operation_name,
                        attempt = attempt,
                        elapsed = ?start_time.elapsed(),
                        "API call succeeded after retries"
                    );
                }
                return Ok(value);
            }
            Err(e) => {
                if !e.is_retryable() {
                    debug!(
                        operation = operation_name,
                        error = %e,
                        "Non-retryable API error, failing immediately"
                    );
                    return Err(e);
                }

                if let Some(duration) = backoff.next_backoff() {
                    warn!(
                        operation = operation_name,
                        attempt = attempt,
                        retry_after = ?duration,
                        error = %e,
                        "Retryable API error, will retry"
                    );
                    tokio::time::sleep(duration).await;
                } else {
                    error!(
                        operation = operation_name,
                        attempt = attempt,
                        elapsed = ?start_time.elapsed(),
                        error = %e,
                        "Backoff exhausted, giving up"
                    );
                    return Err(e);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod retry_tests;
