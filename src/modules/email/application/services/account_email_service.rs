use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::modules::email::application::ports::outgoing::{
    account_email_notifier::{AccountEmail, AccountEmailError, AccountEmailNotifier},
    email_sender::EmailSender,
};

const BRAND: &str = "Cooking DK";

/// Renders account mail to HTML and hands it to an [`EmailSender`].
#[derive(Clone)]
pub struct AccountEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for AccountEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl AccountEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    pub fn render(email: &AccountEmail) -> (String, String) {
        match email {
            AccountEmail::Registration {
                to,
                code,
                expires_at,
            } => (
                format!("Register your account at {BRAND}"),
                code_body(
                    to,
                    "Thanks for signing up. Use the code below to activate your account.",
                    code,
                    Some(expires_at.format("%H:%M:%S %d/%m/%Y UTC").to_string()),
                ),
            ),
            AccountEmail::Activation {
                to,
                code,
                expires_at,
            } => (
                format!("Activate your account at {BRAND}"),
                code_body(
                    to,
                    "Use the code below to activate your account.",
                    code,
                    Some(expires_at.format("%H:%M:%S %d/%m/%Y UTC").to_string()),
                ),
            ),
            AccountEmail::PasswordReset { to, code } => (
                format!("Change password at {BRAND}"),
                code_body(
                    to,
                    "We received a request to change your password. Enter this code to continue.",
                    code,
                    None,
                ),
            ),
            AccountEmail::Welcome {
                to,
                username,
                password,
            } => (
                format!("Welcome to {BRAND}"),
                format!(
                    "<h2>Welcome to {BRAND}</h2>\
                     <p>An account has been created for you.</p>\
                     <ul>\
                     <li>Username: <strong>{username}</strong></li>\
                     <li>Email: <strong>{to}</strong></li>\
                     <li>Password: <strong>{password}</strong></li>\
                     </ul>\
                     <p>Please change your password after your first sign in.</p>"
                ),
            ),
        }
    }
}

fn code_body(name: &str, intro: &str, code: &str, expires_at: Option<String>) -> String {
    let expiry = expires_at
        .map(|at| format!("<p>The code expires at {at}.</p>"))
        .unwrap_or_default();

    format!(
        "<p>Hello {name},</p>\
         <p>{intro}</p>\
         <h2 style=\"letter-spacing:4px\">{code}</h2>\
         {expiry}\
         <p>If you did not request this, you can ignore this email.</p>"
    )
}

#[async_trait]
impl AccountEmailNotifier for AccountEmailService {
    async fn notify(&self, email: AccountEmail) -> Result<(), AccountEmailError> {
        let (subject, body) = Self::render(&email);

        self.sender
            .send_email(email.recipient(), &subject, &body)
            .await
            .map_err(|e| AccountEmailError::EmailSendingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::email::application::ports::outgoing::email_sender::EmailSendError;
    use chrono::{TimeZone, Utc};
    use mockall::{mock, predicate::*};

    mock! {
        pub Sender {}
        #[async_trait]
        impl EmailSender for Sender {
            async fn send_email(&self, to: &str, subject: &str, html_body: &str)
                -> Result<(), EmailSendError>;
        }
    }

    #[test]
    fn registration_and_activation_use_different_subjects() {
        let expires_at = Utc.with_ymd_and_hms(2025, 6, 1, 10, 5, 0).unwrap();

        let (subject, body) = AccountEmailService::render(&AccountEmail::Registration {
            to: "cook@example.com".to_string(),
            code: "123456".to_string(),
            expires_at,
        });
        assert_eq!(subject, "Register your account at Cooking DK");
        assert!(body.contains("123456"));
        assert!(body.contains("10:05:00 01/06/2025 UTC"));

        let (subject, _) = AccountEmailService::render(&AccountEmail::Activation {
            to: "cook@example.com".to_string(),
            code: "123456".to_string(),
            expires_at,
        });
        assert_eq!(subject, "Activate your account at Cooking DK");
    }

    #[test]
    fn welcome_carries_credentials() {
        let (subject, body) = AccountEmailService::render(&AccountEmail::Welcome {
            to: "staff@example.com".to_string(),
            username: "kitchenstaff".to_string(),
            password: "Ab1@xyzXYZ12".to_string(),
        });

        assert_eq!(subject, "Welcome to Cooking DK");
        assert!(body.contains("kitchenstaff"));
        assert!(body.contains("staff@example.com"));
        assert!(body.contains("Ab1@xyzXYZ12"));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let email = AccountEmail::PasswordReset {
            to: "cook@example.com".to_string(),
            code: "987654".to_string(),
        };
        let debug = format!("{email:?}");
        assert!(!debug.contains("987654"));
        assert!(debug.contains("password_reset"));
    }

    #[tokio::test]
    async fn notify_sends_rendered_reset_mail() {
        let mut sender = MockSender::new();
        sender
            .expect_send_email()
            .with(
                eq("cook@example.com"),
                eq("Change password at Cooking DK"),
                function(|body: &str| body.contains("987654")),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = AccountEmailService::new(Arc::new(sender));
        let result = service
            .notify(AccountEmail::PasswordReset {
                to: "cook@example.com".to_string(),
                code: "987654".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn notify_maps_sender_failure() {
        let mut sender = MockSender::new();
        sender
            .expect_send_email()
            .returning(|_, _, _| Err(EmailSendError::TransportFailed("refused".to_string())));

        let service = AccountEmailService::new(Arc::new(sender));
        let result = service
            .notify(AccountEmail::PasswordReset {
                to: "cook@example.com".to_string(),
                code: "987654".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AccountEmailError::EmailSendingFailed(msg)) if msg.contains("refused")
        ));
    }
}
