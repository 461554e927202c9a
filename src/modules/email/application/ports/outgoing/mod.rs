pub mod account_email_notifier;
pub mod email_sender;

pub use account_email_notifier::{AccountEmail, AccountEmailError, AccountEmailNotifier};
pub use email_sender::{EmailSendError, EmailSender};
