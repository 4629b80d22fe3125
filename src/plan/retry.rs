// ABOUTME: Bounded retry with linear backoff and per-attempt deadline
// ABOUTME: Reissues the whole operation on any failure until the retry budget is spent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future::Future;

use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

use crate::config::RetryConfig;
use crate::errors::{AppError, PlanGenerationError};

/// Run `operation` until it succeeds or `max_retries` retries have failed
///
/// The n-th retry waits `base_delay * n` before starting. An attempt that
/// exceeds `attempt_timeout` is dropped and counts as a failure.
///
/// # Errors
///
/// Returns `ServiceUnavailable` carrying the final attempt's error and the
/// number of attempts made.
pub async fn with_retry<T, F, Fut>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, PlanGenerationError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let max_attempts = config.max_attempts();
    let mut attempt = 0;

    loop {
        attempt += 1;
        debug!(attempt, max_attempts, "Starting {operation_name} attempt");

        let error = match timeout(config.attempt_timeout, operation()).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(error)) => error,
            Err(_) => AppError::service_unavailable(format!(
                "{operation_name} attempt timed out after {}s",
                config.attempt_timeout.as_secs_f64()
            )),
        };

        if attempt >= max_attempts {
            warn!(
                attempts = attempt,
                error = %error,
                "{operation_name} failed, retry budget exhausted"
            );
            return Err(PlanGenerationError::ServiceUnavailable {
                attempts: attempt,
                source: error,
            });
        }

        let delay = config.delay_for_retry(attempt);
        warn!(
            attempt,
            max_attempts,
            delay_ms = delay.as_millis() as u64,
            error = %error,
            "{operation_name} failed, retrying"
        );
        sleep(delay).await;
    }
}
