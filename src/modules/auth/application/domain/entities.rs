use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{Account, Role};

/// Identity carried by a verified token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl Principal {
    pub fn has_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}

impl From<&Account> for Principal {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email_or_empty().to_string(),
            role: account.role,
        }
    }
}

/// Token pair handed out on login, activation and OAuth sign-in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub account: Principal,
    pub access_token: String,
    pub expires_access: DateTime<Utc>,
    pub refresh_token: String,
    pub expires_refresh: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshedAccess {
    pub access_token: String,
    pub expires_access: DateTime<Utc>,
}
