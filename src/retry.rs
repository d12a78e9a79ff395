//! Bounded fixed-delay retry for one-shot startup tasks.
//!
//! Used by `init_db` to ride out a database container that is still coming
//! up. Deliberately simple: a fixed attempt count and a fixed delay, no
//! backoff.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;

// ---

/// Run `op` up to `max_attempts` times, sleeping `delay` between failures.
///
/// `op` receives the 1-based attempt number. Each failed attempt is logged;
/// after the final attempt the last error is returned unchanged, with no
/// trailing delay. `max_attempts` is clamped to at least one.
pub async fn with_fixed_retry<T, F, Fut>(max_attempts: u32, delay: Duration, mut op: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    // ---
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts => {
                tracing::warn!("Attempt {} failed: {}", attempt, e);
                tracing::info!("Retrying in {} seconds...", delay.as_secs());
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!("Attempt {} failed: {}", attempt, e);
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_on_final_attempt() {
        // ---
        let calls = Cell::new(0u32);

        let result = with_fixed_retry(5, Duration::from_secs(5), |attempt| {
            calls.set(calls.get() + 1);
            async move {
                if attempt < 5 {
                    Err(anyhow!("connection refused"))
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 5);
        assert_eq!(calls.get(), 5, "failure on 4 attempts must not give up");
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausts_after_exactly_max_attempts() {
        // ---
        let calls = Cell::new(0u32);
        let start = tokio::time::Instant::now();

        let result: Result<()> = with_fixed_retry(5, Duration::from_secs(5), |_| {
            calls.set(calls.get() + 1);
            async { Err(anyhow!("still unreachable")) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 5);
        // 4 delays between 5 attempts, none after the last
        assert_eq!(start.elapsed(), Duration::from_secs(20));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_success_returns_immediately() {
        // ---
        let start = tokio::time::Instant::now();

        let result = with_fixed_retry(5, Duration::from_secs(5), |attempt| async move {
            Ok(attempt)
        })
        .await;

        assert_eq!(result.unwrap(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_attempts_clamped_to_one() {
        // ---
        let calls = Cell::new(0u32);

        let result: Result<()> = with_fixed_retry(0, Duration::from_secs(5), |_| {
            calls.set(calls.get() + 1);
            async { Err(anyhow!("boom")) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }
}
