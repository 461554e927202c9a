use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ========================= Enumerations =========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Staff,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Staff => "STAFF",
            Role::Admin => "ADMIN",
        }
    }

    /// Roles this role may not see when listing accounts. `None` means the
    /// role may not list accounts at all.
    pub fn hidden_roles_when_listing(&self) -> Option<Vec<Role>> {
        match self {
            Role::Admin => Some(vec![Role::Admin]),
            Role::Staff => Some(vec![Role::Staff, Role::Admin]),
            Role::User => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not valid")]
pub struct EnumParseError(&'static str);

impl FromStr for Role {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "STAFF" => Ok(Role::Staff),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(EnumParseError("Role")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Local,
    Google,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Local => "LOCAL",
            AccountType::Google => "GOOGLE",
        }
    }
}

impl FromStr for AccountType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOCAL" => Ok(AccountType::Local),
            "GOOGLE" => Ok(AccountType::Google),
            _ => Err(EnumParseError("Account type")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }
}

impl FromStr for Gender {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            "OTHER" => Ok(Gender::Other),
            _ => Err(EnumParseError("Gender")),
        }
    }
}

// ========================= One-time code =========================

/// Six-digit code paired with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl OtpCode {
    pub const TTL_MINUTES: i64 = 5;

    pub fn issue(code: String, now: DateTime<Utc>) -> Self {
        Self {
            code,
            expires_at: now + Duration::minutes(Self::TTL_MINUTES),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpCheck {
    Valid,
    Missing,
    Expired,
    Mismatch,
}

// ========================= Account =========================

#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: Role,
    pub account_type: AccountType,
    pub is_active: bool,
    pub is_banned: bool,
    pub code_id: Option<String>,
    pub code_expired: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// A code is valid strictly before its expiry instant.
    pub fn check_otp(&self, code: &str, now: DateTime<Utc>) -> OtpCheck {
        match (&self.code_id, self.code_expired) {
            (Some(stored), Some(expires_at)) => {
                if now >= expires_at {
                    OtpCheck::Expired
                } else if stored != code {
                    OtpCheck::Mismatch
                } else {
                    OtpCheck::Valid
                }
            }
            _ => OtpCheck::Missing,
        }
    }

    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

// ========================= User info =========================

/// Partial update of the personal-info row; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<NaiveDate>,
    pub address: Option<String>,
    pub gender: Option<Gender>,
    pub avatar_url: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self == &ProfilePatch::default()
    }
}
