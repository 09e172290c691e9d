use std::time::Duration;

use futures::future::BoxFuture;

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Retry policy for database-backed service operations
///
/// Only errors classified as [`ErrorRetryStrategy::Retry`] are attempted again, domain errors
/// are returned on the first occurrence.
pub struct RetryContext {
    /// Max attempts before failure
    max_attempts: u32,
    /// Initial backoff between attempts
    initial_backoff: Duration,
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 2;
    const DEFAULT_INITIAL_BACKOFF_MILLIS: u64 = 50;

    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Duration::from_millis(Self::DEFAULT_INITIAL_BACKOFF_MILLIS),
        }
    }

    /// Execute an operation with automatic retry logic
    ///
    /// The operation must be restartable from scratch: every attempt opens its own transaction,
    /// so a failed attempt leaves nothing behind.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "reserve showtime ID 1")
    /// - `operation`: Produces a fresh future for each attempt
    pub async fn execute_with_retry<R, F>(&self, description: &str, operation: F) -> Result<R, Error>
    where
        F: Fn() -> BoxFuture<'static, Result<R, Error>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => return Err(e),
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    };

    use sea_orm::{DbErr, RuntimeErr};

    use crate::server::{
        error::{reservation::ReservationError, Error},
        service::retry::RetryContext,
    };

    /// Expect a transient error to be retried once and then succeed
    #[tokio::test]
    async fn retries_transient_error_once() {
        let attempts = Arc::new(AtomicU32::new(0));

        let ctx = RetryContext::new();
        let result = ctx
            .execute_with_retry("flaky operation", || {
                let attempts = attempts.clone();

                Box::pin(async move {
                    if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                        return Err(Error::DbErr(DbErr::Conn(RuntimeErr::Internal(
                            "connection reset".to_string(),
                        ))));
                    }

                    Ok(7)
                })
            })
            .await;

        assert_eq!(result.ok(), Some(7));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    /// Expect a transient error to surface after two attempts
    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let attempts = Arc::new(AtomicU32::new(0));

        let ctx = RetryContext::new();
        let result: Result<(), Error> = ctx
            .execute_with_retry("failing operation", || {
                let attempts = attempts.clone();

                Box::pin(async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(Error::DbErr(DbErr::Conn(RuntimeErr::Internal(
                        "connection reset".to_string(),
                    ))))
                })
            })
            .await;

        assert!(matches!(result, Err(Error::DbErr(DbErr::Conn(_)))));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    /// Expect domain errors to be returned without retrying
    #[tokio::test]
    async fn does_not_retry_domain_error() {
        let attempts = Arc::new(AtomicU32::new(0));

        let ctx = RetryContext::new();
        let result: Result<(), Error> = ctx
            .execute_with_retry("full showtime", || {
                let attempts = attempts.clone();

                Box::pin(async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    Err(ReservationError::NoTicketsAvailable(1).into())
                })
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::ReservationError(ReservationError::NoTicketsAvailable(1)))
        ));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
