pub mod account_email_service;
pub mod background_notifier;

pub use account_email_service::AccountEmailService;
pub use background_notifier::BackgroundEmailNotifier;
