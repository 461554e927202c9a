use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::ports::outgoing::{
    IssuedToken, TokenClaims, TokenError, TokenKind, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_seconds: i64,
}

impl KeyPair {
    fn new(secret: &str, expiry_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry_seconds,
        }
    }
}

/// HS256 tokens; access and refresh tokens are signed with different secrets.
#[derive(Clone)]
pub struct JwtTokenService {
    access: KeyPair,
    refresh: KeyPair,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            access: KeyPair::new(&config.access_secret, config.access_token_expiry),
            refresh: KeyPair::new(&config.refresh_secret, config.refresh_token_expiry),
        }
    }

    fn keys(&self, kind: TokenKind) -> &KeyPair {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    fn decode_claims(&self, token: &str, kind: TokenKind) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded = decode::<TokenClaims>(token, &self.keys(kind).decoding, &validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!(
                            token_type = kind.as_str(),
                            "Token verification failed: Invalid signature"
                        );
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::warn!("Token verification failed: Malformed or wrong algorithm");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: {}", e);
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

impl TokenProvider for JwtTokenService {
    fn issue(&self, principal: &Principal, kind: TokenKind) -> Result<IssuedToken, TokenError> {
        let keys = self.keys(kind);
        let now = Utc::now();
        let expires_at = now + Duration::seconds(keys.expiry_seconds);

        let claims = TokenClaims {
            id: principal.id,
            email: principal.email.clone(),
            role: principal.role,
            token_type: kind.as_str().to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
            .map_err(|e| TokenError::EncodingError(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at,
            ttl_seconds: keys.expiry_seconds.max(0) as u64,
        })
    }

    fn verify(&self, token: &str, kind: TokenKind) -> Result<Principal, TokenError> {
        let claims = self.decode_claims(token, kind)?;

        if claims.token_type != kind.as_str() {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                kind.as_str(),
                claims.token_type
            );
            return Err(TokenError::InvalidTokenType(kind.as_str().to_string()));
        }

        Ok(claims.principal())
    }
}
