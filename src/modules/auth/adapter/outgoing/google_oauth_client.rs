use async_trait::async_trait;
use serde::Deserialize;
use std::env;

use crate::modules::account::application::use_cases::resolve_oauth_account::OAuthProfile;
use crate::modules::auth::application::ports::outgoing::{OAuthProvider, OAuthProviderError};

const AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";
const SCOPES: &str = "openid email profile";

#[derive(Debug, Clone, Default)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
}

impl GoogleOAuthConfig {
    pub fn from_env() -> Self {
        let config = Self {
            client_id: env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            callback_url: env::var("GOOGLE_CALLBACK_URL").unwrap_or_default(),
        };
        if !config.is_configured() {
            tracing::warn!("Google OAuth is not configured; Google login will fail");
        }
        config
    }

    pub fn is_configured(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty() && !self.callback_url.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    email: Option<String>,
    #[serde(default)]
    given_name: String,
    #[serde(default)]
    family_name: String,
    picture: Option<String>,
}

impl GoogleUserInfo {
    fn into_profile(self) -> Result<OAuthProfile, OAuthProviderError> {
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| OAuthProviderError::ProfileFailed("profile has no email".to_string()))?;

        Ok(OAuthProfile {
            email,
            first_name: self.given_name,
            last_name: self.family_name,
            avatar_url: self.picture,
        })
    }
}

/// Authorization-code flow against Google's OAuth 2.0 endpoints.
#[derive(Clone)]
pub struct GoogleOAuthClient {
    config: GoogleOAuthConfig,
    http: reqwest::Client,
}

impl GoogleOAuthClient {
    pub fn new(config: GoogleOAuthConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    async fn exchange_code(&self, code: &str) -> Result<String, OAuthProviderError> {
        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.callback_url.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(TOKEN_URL)
            .form(&params)
            .send()
            .await
            .map_err(|e| OAuthProviderError::ExchangeFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OAuthProviderError::ExchangeFailed(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| OAuthProviderError::ExchangeFailed(e.to_string()))?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthClient {
    fn authorization_url(&self) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.callback_url.as_str()),
            ("response_type", "code"),
            ("scope", SCOPES),
        ];
        match reqwest::Url::parse_with_params(AUTHORIZE_URL, &params) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::error!("Could not build Google authorization URL: {}", e);
                AUTHORIZE_URL.to_string()
            }
        }
    }

    async fn fetch_profile(&self, code: &str) -> Result<OAuthProfile, OAuthProviderError> {
        let access_token = self.exchange_code(code).await?;

        let response = self
            .http
            .get(USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| OAuthProviderError::ProfileFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OAuthProviderError::ProfileFailed(format!(
                "userinfo endpoint returned {}",
                response.status()
            )));
        }

        let info: GoogleUserInfo = response
            .json()
            .await
            .map_err(|e| OAuthProviderError::ProfileFailed(e.to_string()))?;
        info.into_profile()
    }
}
