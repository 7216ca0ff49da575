use std::{fmt::Display, future::Future, time::Duration};

/// Bounded retry with a fixed delay between attempts
///
/// Exhaustion is silent: every rejected attempt is logged, and the caller
/// receives `None` rather than an error once all attempts are spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Runs `op` until it yields a value accepted by `is_success`
    ///
    /// `op` receives the 1-based attempt number. Errors and rejected values
    /// both count as failed attempts. The delay is only slept between
    /// attempts, never after the last one.
    pub async fn run<T, E, F, Fut, P>(&self, label: &str, mut op: F, is_success: P) -> Option<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
        P: Fn(&T) -> bool,
    {
        for attempt in 1..=self.max_attempts {
            match op(attempt).await {
                Ok(value) if is_success(&value) => {
                    tracing::debug!(operation = %label, attempt, "Attempt succeeded");
                    return Some(value);
                }
                Ok(_) => {
                    tracing::warn!(
                        operation = %label,
                        attempt,
                        "Attempt rejected by success check"
                    );
                }
                Err(e) => {
                    tracing::warn!(operation = %label, attempt, error = %e, "Attempt failed");
                }
            }

            if attempt < self.max_attempts {
                tokio::time::sleep(self.delay).await;
            }
        }

        tracing::debug!(
            operation = %label,
            attempts = self.max_attempts,
            "Retries exhausted"
        );
        None
    }
}
