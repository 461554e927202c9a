use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::modules::email::application::ports::outgoing::account_email_notifier::{
    AccountEmail, AccountEmailError, AccountEmailNotifier,
};

const MAX_ATTEMPTS: u32 = 3;

/// Fire-and-forget wrapper: delivery runs on a spawned task with
/// exponential backoff and `notify` returns as soon as it is scheduled.
#[derive(Clone)]
pub struct BackgroundEmailNotifier {
    inner: Arc<dyn AccountEmailNotifier + Send + Sync>,
    backoff_unit: Duration,
}

impl BackgroundEmailNotifier {
    pub fn new(inner: Arc<dyn AccountEmailNotifier + Send + Sync>) -> Self {
        Self {
            inner,
            backoff_unit: Duration::from_secs(1),
        }
    }

    pub fn with_backoff_unit(mut self, unit: Duration) -> Self {
        self.backoff_unit = unit;
        self
    }
}

#[async_trait]
impl AccountEmailNotifier for BackgroundEmailNotifier {
    async fn notify(&self, email: AccountEmail) -> Result<(), AccountEmailError> {
        let inner = self.inner.clone();
        let unit = self.backoff_unit;

        tokio::spawn(async move {
            for attempt in 1..=MAX_ATTEMPTS {
                match inner.notify(email.clone()).await {
                    Ok(()) => {
                        tracing::debug!(kind = email.kind(), to = %email.recipient(), "Email sent");
                        return;
                    }
                    Err(e) if attempt < MAX_ATTEMPTS => {
                        tracing::warn!(
                            "Email attempt {}/{} failed for {}: {}. Retrying...",
                            attempt,
                            MAX_ATTEMPTS,
                            email.recipient(),
                            e
                        );
                        tokio::time::sleep(unit * 2_u32.pow(attempt)).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            "All {} email attempts failed for {}: {}",
                            MAX_ATTEMPTS,
                            email.recipient(),
                            e
                        );
                    }
                }
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FlakyNotifier {
        failures_before_success: u32,
        calls: Arc<AtomicU32>,
    }

    #[async_trait]
    impl AccountEmailNotifier for FlakyNotifier {
        async fn notify(&self, _email: AccountEmail) -> Result<(), AccountEmailError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call <= self.failures_before_success {
                Err(AccountEmailError::EmailSendingFailed("smtp down".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn reset_mail() -> AccountEmail {
        AccountEmail::PasswordReset {
            to: "cook@example.com".to_string(),
            code: "123456".to_string(),
        }
    }

    async fn wait_for_calls(calls: &AtomicU32, expected: u32) {
        for _ in 0..200 {
            if calls.load(Ordering::SeqCst) >= expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test]
    async fn returns_immediately_and_retries_until_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let notifier = BackgroundEmailNotifier::new(Arc::new(FlakyNotifier {
            failures_before_success: 2,
            calls: calls.clone(),
        }))
        .with_backoff_unit(Duration::from_millis(1));

        assert!(notifier.notify(reset_mail()).await.is_ok());

        wait_for_calls(&calls, 3).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_three_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let notifier = BackgroundEmailNotifier::new(Arc::new(FlakyNotifier {
            failures_before_success: u32::MAX,
            calls: calls.clone(),
        }))
        .with_backoff_unit(Duration::from_millis(1));

        assert!(notifier.notify(reset_mail()).await.is_ok());

        wait_for_calls(&calls, 3).await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
