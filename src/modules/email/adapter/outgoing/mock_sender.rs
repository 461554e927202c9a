use crate::modules::email::application::ports::outgoing::email_sender::{
    EmailSendError, EmailSender,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory sender for local runs without SMTP.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(to, subject, body)` for every message sent so far.
    pub fn sent_emails(&self) -> Vec<(String, String, String)> {
        self.sent_emails
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailSendError> {
        tracing::info!(to = %to, subject = %subject, "Email captured by mock sender");
        self.sent_emails
            .lock()
            .map_err(|e| EmailSendError::TransportFailed(e.to_string()))?
            .push((to.to_string(), subject.to_string(), html_body.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::email::application::ports::outgoing::account_email_notifier::{
        AccountEmail, AccountEmailNotifier,
    };
    use crate::modules::email::application::services::AccountEmailService;

    #[tokio::test]
    async fn captures_rendered_account_mail() {
        let sender = MockEmailSender::new();
        let service = AccountEmailService::new(Arc::new(sender.clone()));

        service
            .notify(AccountEmail::Welcome {
                to: "staff@example.com".to_string(),
                username: "kitchenstaff".to_string(),
                password: "Ab1@xyzXYZ12".to_string(),
            })
            .await
            .unwrap();

        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "staff@example.com");
        assert_eq!(sent[0].1, "Welcome to Cooking DK");
    }
}
