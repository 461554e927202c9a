pub mod oauth_provider;
pub mod refresh_token_store;
pub mod token_provider;

pub use oauth_provider::{OAuthProvider, OAuthProviderError};
pub use refresh_token_store::{RefreshTokenStore, RefreshTokenStoreError};
pub use token_provider::{IssuedToken, TokenClaims, TokenError, TokenKind, TokenProvider};
