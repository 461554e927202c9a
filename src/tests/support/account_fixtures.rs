use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::account::application::domain::entities::{
    Account, AccountType, Gender, OtpCode, ProfilePatch, Role,
};
use crate::modules::account::application::ports::outgoing::{
    AccountListFilter, AccountListItem, AccountProfileView, AccountQuery, AccountQueryError,
    AccountRepository, AccountRepositoryError, CredentialGenerator, HashError, NewAccount,
    PasswordHasher, UserInfoView,
};
use crate::modules::auth::application::ports::outgoing::refresh_token_store::{
    RefreshTokenStore, RefreshTokenStoreError,
};
use crate::modules::email::application::ports::outgoing::{
    AccountEmail, AccountEmailError, AccountEmailNotifier,
};
use crate::shared::pagination::PageRequest;

/* --------------------------------------------------
 * Accounts
 * -------------------------------------------------- */

/// Active, unbanned LOCAL account `cook@example.com` / `cookmaster`
/// whose password is `Secret@123` under [`StubHasher`].
pub fn account(role: Role) -> Account {
    let now = Utc::now();
    Account {
        id: Uuid::new_v4(),
        email: Some("cook@example.com".to_string()),
        username: Some("cookmaster".to_string()),
        password_hash: Some("hashed:Secret@123".to_string()),
        role,
        account_type: AccountType::Local,
        is_active: true,
        is_banned: false,
        code_id: None,
        code_expired: None,
        is_deleted: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn account_with(email: &str, username: &str, role: Role) -> Account {
    Account {
        email: Some(email.to_string()),
        username: Some(username.to_string()),
        ..account(role)
    }
}

/// Inactive account holding `code`, expiring `expires_in_secs` from now.
pub fn pending_account(code: &str, expires_in_secs: i64) -> Account {
    Account {
        is_active: false,
        code_id: Some(code.to_string()),
        code_expired: Some(Utc::now() + Duration::seconds(expires_in_secs)),
        ..account(Role::User)
    }
}

pub fn empty_info() -> UserInfoView {
    UserInfoView {
        first_name: String::new(),
        last_name: String::new(),
        phone: None,
        dob: None,
        address: None,
        gender: Gender::Other,
        avatar_url: None,
    }
}

#[derive(Clone, Default)]
pub struct InMemoryAccountStore {
    accounts: Arc<Mutex<Vec<Account>>>,
    profiles: Arc<Mutex<HashMap<Uuid, (UserInfoView, bool)>>>,
    should_fail: bool,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_account(self, account: Account) -> Self {
        self.profiles
            .lock()
            .unwrap()
            .insert(account.id, (empty_info(), account.is_deleted));
        self.accounts.lock().unwrap().push(account);
        self
    }

    pub fn with_profile(self, account_id: Uuid, info: UserInfoView) -> Self {
        self.profiles
            .lock()
            .unwrap()
            .insert(account_id, (info, false));
        self
    }

    /// Any account, deleted or not.
    pub fn get(&self, id: Uuid) -> Option<Account> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    pub fn profile(&self, id: Uuid) -> Option<UserInfoView> {
        self.profiles
            .lock()
            .unwrap()
            .get(&id)
            .map(|(info, _)| info.clone())
    }

    pub fn profile_deleted(&self, id: Uuid) -> Option<bool> {
        self.profiles.lock().unwrap().get(&id).map(|(_, d)| *d)
    }

    pub fn count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    fn fail_query(&self) -> Result<(), AccountQueryError> {
        if self.should_fail {
            return Err(AccountQueryError::DatabaseError("connection lost".to_string()));
        }
        Ok(())
    }

    fn fail_repo(&self) -> Result<(), AccountRepositoryError> {
        if self.should_fail {
            return Err(AccountRepositoryError::DatabaseError(
                "connection lost".to_string(),
            ));
        }
        Ok(())
    }

    fn live(&self, pred: impl Fn(&Account) -> bool) -> Option<Account> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| !a.is_deleted && pred(a))
            .cloned()
    }

    fn update(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut Account),
    ) -> Result<Account, AccountRepositoryError> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = accounts
            .iter_mut()
            .find(|a| a.id == id && !a.is_deleted)
            .ok_or(AccountRepositoryError::NotFound)?;
        apply(account);
        account.updated_at = Utc::now();
        Ok(account.clone())
    }

    fn list_item(&self, account: &Account) -> AccountListItem {
        AccountListItem {
            id: account.id,
            email: account.email.clone(),
            username: account.username.clone(),
            role: account.role,
            account_type: account.account_type,
            is_active: account.is_active,
            is_banned: account.is_banned,
            is_deleted: account.is_deleted,
            user_info: self.profile(account.id),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

#[async_trait]
impl AccountQuery for InMemoryAccountStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountQueryError> {
        self.fail_query()?;
        Ok(self.live(|a| a.id == id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError> {
        self.fail_query()?;
        Ok(self.live(|a| a.email.as_deref() == Some(email)))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountQueryError> {
        self.fail_query()?;
        Ok(self.live(|a| a.username.as_deref() == Some(username)))
    }

    async fn get_profile(&self, id: Uuid) -> Result<Option<AccountProfileView>, AccountQueryError> {
        self.fail_query()?;
        let Some(account) = self.live(|a| a.id == id) else {
            return Ok(None);
        };
        Ok(self.profile(id).map(|info| AccountProfileView {
            id: account.id,
            email: account.email,
            username: account.username,
            role: account.role,
            phone: info.phone,
            first_name: info.first_name,
            last_name: info.last_name,
            dob: info.dob,
            address: info.address,
            gender: info.gender,
            avatar_url: info.avatar_url,
        }))
    }

    async fn get_detail(&self, id: Uuid) -> Result<Option<AccountListItem>, AccountQueryError> {
        self.fail_query()?;
        Ok(self.get(id).map(|a| self.list_item(&a)))
    }

    async fn list(
        &self,
        filter: AccountListFilter,
        page: PageRequest,
    ) -> Result<(Vec<AccountListItem>, u64), AccountQueryError> {
        self.fail_query()?;
        let keyword = filter.keyword.map(|k| k.to_lowercase());

        let mut matches: Vec<Account> = self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.is_deleted == filter.is_deleted)
            .filter(|a| !filter.excluded_roles.contains(&a.role))
            .filter(|a| match &keyword {
                Some(k) => a
                    .email
                    .as_deref()
                    .map(|e| e.to_lowercase().contains(k))
                    .unwrap_or(false),
                None => true,
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matches.len() as u64;
        let rows = matches
            .iter()
            .skip(page.offset() as usize)
            .take(page.page_size() as usize)
            .map(|a| self.list_item(a))
            .collect();

        Ok((rows, total))
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountStore {
    async fn create_with_profile(
        &self,
        data: NewAccount,
    ) -> Result<Account, AccountRepositoryError> {
        self.fail_repo()?;
        let taken = self.live(|a| {
            a.email.as_deref() == Some(data.email.as_str())
                || a.username.as_deref() == Some(data.username.as_str())
        });
        if taken.is_some() {
            return Err(AccountRepositoryError::AlreadyExists);
        }

        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            email: Some(data.email),
            username: Some(data.username),
            password_hash: data.password_hash,
            role: data.role,
            account_type: data.account_type,
            is_active: data.is_active,
            is_banned: false,
            code_id: data.otp.as_ref().map(|o| o.code.clone()),
            code_expired: data.otp.as_ref().map(|o| o.expires_at),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };

        let info = UserInfoView {
            first_name: data.first_name,
            last_name: data.last_name,
            avatar_url: data.avatar_url,
            ..empty_info()
        };
        self.profiles
            .lock()
            .unwrap()
            .insert(account.id, (info, false));
        self.accounts.lock().unwrap().push(account.clone());
        Ok(account)
    }

    async fn set_otp(&self, account_id: Uuid, otp: &OtpCode) -> Result<(), AccountRepositoryError> {
        self.fail_repo()?;
        self.update(account_id, |a| {
            a.code_id = Some(otp.code.clone());
            a.code_expired = Some(otp.expires_at);
        })
        .map(|_| ())
    }

    async fn activate(&self, account_id: Uuid) -> Result<Account, AccountRepositoryError> {
        self.fail_repo()?;
        self.update(account_id, |a| {
            a.is_active = true;
            a.code_id = None;
            a.code_expired = None;
        })
    }

    async fn reset_password(
        &self,
        account_id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountRepositoryError> {
        self.fail_repo()?;
        self.update(account_id, |a| {
            a.password_hash = Some(password_hash.to_string());
            a.code_id = None;
            a.code_expired = None;
        })
        .map(|_| ())
    }

    async fn change_password(
        &self,
        account_id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountRepositoryError> {
        self.fail_repo()?;
        self.update(account_id, |a| {
            a.password_hash = Some(password_hash.to_string())
        })
        .map(|_| ())
    }

    async fn update_profile(
        &self,
        account_id: Uuid,
        patch: ProfilePatch,
    ) -> Result<(), AccountRepositoryError> {
        self.fail_repo()?;
        let mut profiles = self.profiles.lock().unwrap();

        if let Some(phone) = &patch.phone {
            let clash = profiles.iter().any(|(id, (info, deleted))| {
                *id != account_id && !deleted && info.phone.as_deref() == Some(phone.as_str())
            });
            if clash {
                return Err(AccountRepositoryError::PhoneAlreadyInUse);
            }
        }

        let (info, _) = profiles
            .get_mut(&account_id)
            .filter(|(_, deleted)| !deleted)
            .ok_or(AccountRepositoryError::NotFound)?;

        if let Some(v) = patch.phone {
            info.phone = Some(v);
        }
        if let Some(v) = patch.first_name {
            info.first_name = v;
        }
        if let Some(v) = patch.last_name {
            info.last_name = v;
        }
        if let Some(v) = patch.dob {
            info.dob = Some(v);
        }
        if let Some(v) = patch.address {
            info.address = Some(v);
        }
        if let Some(v) = patch.gender {
            info.gender = v;
        }
        if let Some(v) = patch.avatar_url {
            info.avatar_url = Some(v);
        }
        Ok(())
    }

    async fn set_banned(
        &self,
        account_id: Uuid,
        banned: bool,
    ) -> Result<Account, AccountRepositoryError> {
        self.fail_repo()?;
        self.update(account_id, |a| a.is_banned = banned)
    }

    async fn soft_delete(&self, account_id: Uuid) -> Result<(), AccountRepositoryError> {
        self.fail_repo()?;
        self.update(account_id, |a| a.is_deleted = true)?;
        if let Some((_, deleted)) = self.profiles.lock().unwrap().get_mut(&account_id) {
            *deleted = true;
        }
        Ok(())
    }
}

/* --------------------------------------------------
 * Security
 * -------------------------------------------------- */

/// `hash(p) == "hashed:" + p`.
#[derive(Clone, Default)]
pub struct StubHasher {
    pub should_fail: bool,
}

#[async_trait]
impl PasswordHasher for StubHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        if self.should_fail {
            return Err(HashError::HashFailed);
        }
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if self.should_fail {
            return Err(HashError::VerifyFailed);
        }
        Ok(hash == format!("hashed:{password}"))
    }
}

#[derive(Clone)]
pub struct FixedCredentials {
    pub code: String,
    pub password: String,
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self {
            code: "123456".to_string(),
            password: "Gen@Pass1234".to_string(),
        }
    }
}

impl CredentialGenerator for FixedCredentials {
    fn otp_code(&self) -> String {
        self.code.clone()
    }

    fn password(&self, _length: usize) -> String {
        self.password.clone()
    }
}

/* --------------------------------------------------
 * Email
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<AccountEmail>>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<AccountEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountEmailNotifier for RecordingNotifier {
    async fn notify(&self, email: AccountEmail) -> Result<(), AccountEmailError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/* --------------------------------------------------
 * Refresh tokens
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct InMemoryRefreshTokenStore {
    entries: Arc<Mutex<HashMap<Uuid, (String, u64)>>>,
    pub should_fail: bool,
}

impl InMemoryRefreshTokenStore {
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_token(self, account_id: Uuid, token: &str) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(account_id, (token.to_string(), 3600));
        self
    }

    pub fn token(&self, account_id: Uuid) -> Option<String> {
        self.entries
            .lock()
            .unwrap()
            .get(&account_id)
            .map(|(t, _)| t.clone())
    }

    pub fn ttl(&self, account_id: Uuid) -> Option<u64> {
        self.entries
            .lock()
            .unwrap()
            .get(&account_id)
            .map(|(_, ttl)| *ttl)
    }

    fn check(&self) -> Result<(), RefreshTokenStoreError> {
        if self.should_fail {
            return Err(RefreshTokenStoreError::CacheError(
                "redis unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn save(
        &self,
        account_id: Uuid,
        token: &str,
        ttl_seconds: u64,
    ) -> Result<(), RefreshTokenStoreError> {
        self.check()?;
        self.entries
            .lock()
            .unwrap()
            .insert(account_id, (token.to_string(), ttl_seconds));
        Ok(())
    }

    async fn find(&self, account_id: Uuid) -> Result<Option<String>, RefreshTokenStoreError> {
        self.check()?;
        Ok(self.token(account_id))
    }

    async fn revoke(&self, account_id: Uuid) -> Result<(), RefreshTokenStoreError> {
        self.check()?;
        self.entries.lock().unwrap().remove(&account_id);
        Ok(())
    }
}
