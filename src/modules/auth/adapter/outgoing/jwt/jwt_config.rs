use std::env;

const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_token_expiry: i64,  // seconds
    pub refresh_token_expiry: i64, // seconds
}

impl JwtConfig {
    /// Accepts plain seconds or a number suffixed with `s`, `m`, `h` or `d`.
    pub fn parse_duration(raw: &str) -> Option<i64> {
        let raw = raw.trim();
        let (digits, unit) = match raw.char_indices().last()? {
            (idx, c) if c.is_ascii_alphabetic() => (&raw[..idx], c.to_ascii_lowercase()),
            _ => (raw, 's'),
        };
        let value = digits.parse::<i64>().ok()?;
        let factor = match unit {
            's' => 1,
            'm' => 60,
            'h' => 3_600,
            'd' => 86_400,
            _ => return None,
        };
        value.checked_mul(factor)
    }

    fn expiry_from_env(key: &str, default: &str) -> i64 {
        let raw = env::var(key).unwrap_or_else(|_| default.to_string());
        match Self::parse_duration(&raw) {
            Some(seconds) if seconds > 0 => seconds,
            _ => panic!("Invalid {} value: {}", key, raw),
        }
    }

    fn secret_from_env(key: &str) -> String {
        let secret = env::var(key).unwrap_or_else(|_| panic!("{} must be set", key));
        if secret.len() < MIN_SECRET_LEN {
            panic!(
                "{} must be at least {} characters long for HS256 algorithm",
                key, MIN_SECRET_LEN
            );
        }
        secret
    }

    pub fn from_env() -> Self {
        let access_secret = Self::secret_from_env("JWT_ACCESS_TOKEN_SECRET");
        let refresh_secret = Self::secret_from_env("JWT_REFRESH_TOKEN_SECRET");

        if access_secret == refresh_secret {
            tracing::warn!("Access and refresh tokens share the same secret");
        }

        let access_token_expiry = Self::expiry_from_env("JWT_ACCESS_TOKEN_EXPIRED", "15m");
        let refresh_token_expiry = Self::expiry_from_env("JWT_REFRESH_TOKEN_EXPIRED", "7d");

        if refresh_token_expiry <= access_token_expiry {
            panic!("JWT_REFRESH_TOKEN_EXPIRED must be greater than JWT_ACCESS_TOKEN_EXPIRED");
        }

        Self {
            access_secret,
            refresh_secret,
            access_token_expiry,
            refresh_token_expiry,
        }
    }
}
