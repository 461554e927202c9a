use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

/// Transactional mail sent during the account lifecycle.
#[derive(Clone, PartialEq, Eq)]
pub enum AccountEmail {
    /// First code, sent right after sign-up.
    Registration {
        to: String,
        code: String,
        expires_at: DateTime<Utc>,
    },
    /// Code requested again for a not-yet-active account.
    Activation {
        to: String,
        code: String,
        expires_at: DateTime<Utc>,
    },
    PasswordReset {
        to: String,
        code: String,
    },
    /// Credentials of an account created by an administrator.
    Welcome {
        to: String,
        username: String,
        password: String,
    },
}

impl AccountEmail {
    pub fn recipient(&self) -> &str {
        match self {
            AccountEmail::Registration { to, .. }
            | AccountEmail::Activation { to, .. }
            | AccountEmail::PasswordReset { to, .. }
            | AccountEmail::Welcome { to, .. } => to,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AccountEmail::Registration { .. } => "registration",
            AccountEmail::Activation { .. } => "activation",
            AccountEmail::PasswordReset { .. } => "password_reset",
            AccountEmail::Welcome { .. } => "welcome",
        }
    }
}

// Codes and passwords stay out of logs.
impl fmt::Debug for AccountEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountEmail")
            .field("kind", &self.kind())
            .field("to", &self.recipient())
            .finish()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountEmailError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait]
pub trait AccountEmailNotifier: Send + Sync {
    async fn notify(&self, email: AccountEmail) -> Result<(), AccountEmailError>;
}
