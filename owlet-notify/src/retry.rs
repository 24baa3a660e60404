use std::future::Future;

use crate::{DispatchConfig, EmailResult};

/// Runs `send` until it succeeds or the retry budget is spent.
///
/// Attempts are spaced by [`DispatchConfig::backoff`]. Failures that cannot
/// succeed on a retry, such as a malformed recipient, stop the loop on the
/// spot. The returned [`EmailResult`] carries the total number of attempts
/// made, whatever the outcome.
pub async fn send_with_retry<F, Fut>(config: &DispatchConfig, mut send: F) -> EmailResult
where
    F: FnMut() -> Fut,
    Fut: Future<Output = EmailResult>,
{
    let max_attempts = config.max_retries.max(1);
    let mut attempt = 1;

    loop {
        let result = send().await;

        let error = match result.error.clone() {
            None => {
                if attempt > 1 {
                    tracing::info!(
                        attempts = attempt,
                        recipient = result.recipient.as_deref().unwrap_or(""),
                        "email sent after retry"
                    );
                }
                return result.with_attempts(attempt);
            }
            Some(error) => error,
        };

        if !error.is_retryable() {
            tracing::warn!(error = %error, "not retrying permanent send failure");
            return result.with_attempts(attempt);
        }

        if attempt >= max_attempts {
            tracing::error!(
                error = %error,
                attempts = attempt,
                "giving up on email after exhausting retries"
            );
            return result.with_attempts(attempt);
        }

        let delay = config.backoff(attempt);
        tracing::warn!(
            error = %error,
            attempt,
            max_attempts,
            delay_ms = delay.as_millis() as u64,
            "email send failed, retrying"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use crate::SendError;

    use super::*;

    fn fast_config(max_retries: u32) -> DispatchConfig {
        DispatchConfig::new()
            .with_max_retries(max_retries)
            .with_base_delay(Duration::from_millis(10))
            .with_max_delay(Duration::from_millis(50))
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let calls = Arc::new(AtomicU32::new(0));

        let counter = calls.clone();
        let result = send_with_retry(&fast_config(3), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                EmailResult::success("user@example.com")
            }
        })
        .await;

        assert!(result.is_success());
        assert_eq!(result.attempts, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retries_until_success() {
        let calls = Arc::new(AtomicU32::new(0));

        let counter = calls.clone();
        let result = send_with_retry(&fast_config(5), move || {
            let counter = counter.clone();
            async move {
                let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if attempt < 3 {
                    EmailResult::failure(
                        Some("user@example.com".to_string()),
                        SendError::Transport("connection reset".to_string()),
                    )
                } else {
                    EmailResult::success("user@example.com")
                }
            }
        })
        .await;

        assert!(result.is_success());
        assert_eq!(result.attempts, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_validation_failure_short_circuits() {
        let calls = Arc::new(AtomicU32::new(0));

        let counter = calls.clone();
        let result = send_with_retry(&fast_config(5), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                EmailResult::failure(Some("bad@".to_string()), SendError::InvalidRecipient)
            }
        })
        .await;

        assert!(!result.is_success());
        assert_eq!(result.attempts, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.error, Some(SendError::InvalidRecipient));
    }

    #[tokio::test]
    async fn test_exhausts_retry_budget() {
        let calls = Arc::new(AtomicU32::new(0));

        let counter = calls.clone();
        let result = send_with_retry(&fast_config(3), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                EmailResult::failure(
                    Some("user@example.com".to_string()),
                    SendError::Timeout,
                )
            }
        })
        .await;

        assert!(!result.is_success());
        assert_eq!(result.attempts, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(result.error, Some(SendError::Timeout));
    }

    #[tokio::test]
    async fn test_single_attempt_budget_never_sleeps() {
        let calls = Arc::new(AtomicU32::new(0));

        let counter = calls.clone();
        let started = std::time::Instant::now();
        let result = send_with_retry(&fast_config(1), move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                EmailResult::failure(
                    Some("user@example.com".to_string()),
                    SendError::Transport("connection reset".to_string()),
                )
            }
        })
        .await;

        assert_eq!(result.attempts, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(started.elapsed() < Duration::from_millis(500));
    }
}
