pub mod activation_login;
pub mod oauth_login;

pub use activation_login::{ActivationLoginError, ActivationLoginOrchestrator, IActivationLogin};
pub use oauth_login::{IOAuthLogin, OAuthLoginError, OAuthLoginOrchestrator};
