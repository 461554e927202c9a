use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{
    Account, AccountType, Gender, Role,
};
use crate::shared::pagination::PageRequest;

/// Account joined with its personal info, as returned to the owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfileView {
    pub id: Uuid,
    pub email: Option<String>,
    pub username: Option<String>,
    pub role: Role,
    pub phone: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "dob_format")]
    pub dob: Option<NaiveDate>,
    pub address: Option<String>,
    pub gender: Gender,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoView {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    #[serde(with = "dob_format")]
    pub dob: Option<NaiveDate>,
    pub address: Option<String>,
    pub gender: Gender,
    pub avatar_url: Option<String>,
}

/// Row of the administrative account list; also the single-account detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountListItem {
    pub id: Uuid,
    pub email: Option<String>,
    pub username: Option<String>,
    pub role: Role,
    pub account_type: AccountType,
    pub is_active: bool,
    pub is_banned: bool,
    pub is_deleted: bool,
    pub user_info: Option<UserInfoView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Dates leave the API as `dd/MM/yyyy`.
mod dob_format {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(dob: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match dob {
            Some(date) => s.serialize_str(&date.format("%d/%m/%Y").to_string()),
            None => s.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountListFilter {
    pub excluded_roles: Vec<Role>,
    /// Case-insensitive substring of the email.
    pub keyword: Option<String>,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Non-deleted account by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountQueryError>;

    /// Non-deleted account by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError>;

    /// Non-deleted account by exact username.
    async fn find_by_username(&self, username: &str)
        -> Result<Option<Account>, AccountQueryError>;

    async fn get_profile(&self, id: Uuid) -> Result<Option<AccountProfileView>, AccountQueryError>;

    /// Includes soft-deleted accounts.
    async fn get_detail(&self, id: Uuid) -> Result<Option<AccountListItem>, AccountQueryError>;

    /// Newest first. Returns the page together with the total match count.
    async fn list(
        &self,
        filter: AccountListFilter,
        page: PageRequest,
    ) -> Result<(Vec<AccountListItem>, u64), AccountQueryError>;
}
