use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{
    Account, AccountType, OtpCode, ProfilePatch, Role,
};

/// Everything needed to insert an account together with its info row.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub username: String,
    pub password_hash: Option<String>,
    pub role: Role,
    pub account_type: AccountType,
    pub is_active: bool,
    pub otp: Option<OtpCode>,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountRepositoryError {
    #[error("Account already exists")]
    AlreadyExists,

    #[error("Phone number is already in use")]
    PhoneAlreadyInUse,

    #[error("Account not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Inserts the account and its user-info row in one transaction.
    async fn create_with_profile(&self, data: NewAccount)
        -> Result<Account, AccountRepositoryError>;

    async fn set_otp(&self, account_id: Uuid, otp: &OtpCode) -> Result<(), AccountRepositoryError>;

    /// Marks the account active and clears its code.
    async fn activate(&self, account_id: Uuid) -> Result<Account, AccountRepositoryError>;

    /// Stores a new hash and clears any pending code.
    async fn reset_password(
        &self,
        account_id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountRepositoryError>;

    async fn change_password(
        &self,
        account_id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountRepositoryError>;

    async fn update_profile(
        &self,
        account_id: Uuid,
        patch: ProfilePatch,
    ) -> Result<(), AccountRepositoryError>;

    async fn set_banned(
        &self,
        account_id: Uuid,
        banned: bool,
    ) -> Result<Account, AccountRepositoryError>;

    /// Flags the account and its info row as deleted.
    async fn soft_delete(&self, account_id: Uuid) -> Result<(), AccountRepositoryError>;
}
