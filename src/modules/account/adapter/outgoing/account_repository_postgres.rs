use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::account::adapter::outgoing::account_mapper::{to_account, to_db_time};
use crate::modules::account::adapter::outgoing::sea_orm_entity::{accounts, user_info};
use crate::modules::account::application::domain::entities::{
    Account, Gender, OtpCode, ProfilePatch,
};
use crate::modules::account::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, NewAccount,
};
use crate::shared::db::{is_unique_violation, is_unique_violation_on};

#[derive(Clone)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Applies `changes` to a live account and returns the stored row.
    async fn update_account(
        &self,
        account_id: Uuid,
        mut changes: accounts::ActiveModel,
    ) -> Result<Account, AccountRepositoryError> {
        changes.updated_at = Set(Utc::now().fixed_offset());

        let updated = accounts::Entity::update_many()
            .set(changes)
            .filter(accounts::Column::Id.eq(account_id))
            .filter(accounts::Column::IsDeleted.eq(false))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(AccountRepositoryError::NotFound)?;

        to_account(updated).map_err(AccountRepositoryError::DatabaseError)
    }
}

fn blank() -> accounts::ActiveModel {
    <accounts::ActiveModel as Default>::default()
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn create_with_profile(
        &self,
        data: NewAccount,
    ) -> Result<Account, AccountRepositoryError> {
        let now = Utc::now().fixed_offset();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let account = accounts::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(Some(data.email)),
            username: Set(Some(data.username)),
            password: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            account_type: Set(data.account_type.as_str().to_string()),
            is_active: Set(data.is_active),
            is_banned: Set(false),
            code_id: Set(data.otp.as_ref().map(|otp| otp.code.clone())),
            code_expired: Set(data.otp.as_ref().map(|otp| to_db_time(otp.expires_at))),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(map_insert_err)?;

        user_info::ActiveModel {
            account_id: Set(account.id),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            phone: Set(None),
            dob: Set(None),
            address: Set(None),
            gender: Set(Gender::default().as_str().to_string()),
            avatar_url: Set(data.avatar_url),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(map_insert_err)?;

        // Dropping the transaction on any error above rolls both inserts back.
        txn.commit().await.map_err(map_db_err)?;

        to_account(account).map_err(AccountRepositoryError::DatabaseError)
    }

    async fn set_otp(&self, account_id: Uuid, otp: &OtpCode) -> Result<(), AccountRepositoryError> {
        let mut changes = blank();
        changes.code_id = Set(Some(otp.code.clone()));
        changes.code_expired = Set(Some(to_db_time(otp.expires_at)));

        self.update_account(account_id, changes).await.map(|_| ())
    }

    async fn activate(&self, account_id: Uuid) -> Result<Account, AccountRepositoryError> {
        let mut changes = blank();
        changes.is_active = Set(true);
        changes.code_id = Set(None);
        changes.code_expired = Set(None);

        self.update_account(account_id, changes).await
    }

    async fn reset_password(
        &self,
        account_id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountRepositoryError> {
        let mut changes = blank();
        changes.password = Set(Some(password_hash.to_string()));
        changes.code_id = Set(None);
        changes.code_expired = Set(None);

        self.update_account(account_id, changes).await.map(|_| ())
    }

    async fn change_password(
        &self,
        account_id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountRepositoryError> {
        let mut changes = blank();
        changes.password = Set(Some(password_hash.to_string()));

        self.update_account(account_id, changes).await.map(|_| ())
    }

    async fn update_profile(
        &self,
        account_id: Uuid,
        patch: ProfilePatch,
    ) -> Result<(), AccountRepositoryError> {
        let mut changes = <user_info::ActiveModel as Default>::default();

        if let Some(phone) = patch.phone {
            changes.phone = Set(Some(phone));
        }
        if let Some(first_name) = patch.first_name {
            changes.first_name = Set(first_name);
        }
        if let Some(last_name) = patch.last_name {
            changes.last_name = Set(last_name);
        }
        if let Some(dob) = patch.dob {
            changes.dob = Set(Some(dob));
        }
        if let Some(address) = patch.address {
            changes.address = Set(Some(address));
        }
        if let Some(gender) = patch.gender {
            changes.gender = Set(gender.as_str().to_string());
        }
        if let Some(avatar_url) = patch.avatar_url {
            changes.avatar_url = Set(Some(avatar_url));
        }
        changes.updated_at = Set(Utc::now().fixed_offset());

        let result = user_info::Entity::update_many()
            .set(changes)
            .filter(user_info::Column::AccountId.eq(account_id))
            .filter(user_info::Column::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(|e| {
                if is_unique_violation_on(&e, "phone") {
                    AccountRepositoryError::PhoneAlreadyInUse
                } else {
                    map_db_err(e)
                }
            })?;

        if result.rows_affected == 0 {
            return Err(AccountRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_banned(
        &self,
        account_id: Uuid,
        banned: bool,
    ) -> Result<Account, AccountRepositoryError> {
        let mut changes = blank();
        changes.is_banned = Set(banned);

        self.update_account(account_id, changes).await
    }

    async fn soft_delete(&self, account_id: Uuid) -> Result<(), AccountRepositoryError> {
        let now = Utc::now().fixed_offset();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let mut account_changes = blank();
        account_changes.is_deleted = Set(true);
        account_changes.updated_at = Set(now);

        let result = accounts::Entity::update_many()
            .set(account_changes)
            .filter(accounts::Column::Id.eq(account_id))
            .filter(accounts::Column::IsDeleted.eq(false))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(AccountRepositoryError::NotFound);
        }

        let mut info_changes = <user_info::ActiveModel as Default>::default();
        info_changes.is_deleted = Set(true);
        info_changes.updated_at = Set(now);

        user_info::Entity::update_many()
            .set(info_changes)
            .filter(user_info::Column::AccountId.eq(account_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)
    }
}

fn map_insert_err(e: DbErr) -> AccountRepositoryError {
    if is_unique_violation_on(&e, "phone") {
        AccountRepositoryError::PhoneAlreadyInUse
    } else if is_unique_violation(&e) {
        AccountRepositoryError::AlreadyExists
    } else {
        map_db_err(e)
    }
}

fn map_db_err(e: DbErr) -> AccountRepositoryError {
    AccountRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::account::adapter::outgoing::account_mapper::test_models::{
        account_model, info_model,
    };
    use crate::modules::account::application::domain::entities::{AccountType, Role};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn new_account() -> NewAccount {
        NewAccount {
            email: "cook@example.com".to_string(),
            username: "cookmaster".to_string(),
            password_hash: Some("$2b$10$hash".to_string()),
            role: Role::User,
            account_type: AccountType::Local,
            is_active: false,
            otp: Some(OtpCode::issue("123456".to_string(), Utc::now())),
            first_name: String::new(),
            last_name: String::new(),
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn create_inserts_account_and_profile() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![account_model(id, "USER")]])
            .append_query_results([vec![info_model(id)]])
            .into_connection();

        let account = AccountRepositoryPostgres::new(Arc::new(db))
            .create_with_profile(new_account())
            .await
            .unwrap();

        assert_eq!(account.id, id);
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_accounts_email_active\""
                    .to_string(),
            )])
            .into_connection();

        let result = AccountRepositoryPostgres::new(Arc::new(db))
            .create_with_profile(new_account())
            .await;

        assert_eq!(result.unwrap_err(), AccountRepositoryError::AlreadyExists);
    }

    #[tokio::test]
    async fn profile_insert_failure_surfaces_error() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![account_model(id, "USER")]])
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let result = AccountRepositoryPostgres::new(Arc::new(db))
            .create_with_profile(new_account())
            .await;

        assert!(matches!(result, Err(AccountRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn set_banned_returns_updated_row() {
        let id = Uuid::new_v4();
        let mut banned = account_model(id, "USER");
        banned.is_banned = true;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![banned]])
            .into_connection();

        let account = AccountRepositoryPostgres::new(Arc::new(db))
            .set_banned(id, true)
            .await
            .unwrap();

        assert!(account.is_banned);
    }

    #[tokio::test]
    async fn activate_missing_account_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<accounts::Model>::new()])
            .into_connection();

        let result = AccountRepositoryPostgres::new(Arc::new(db))
            .activate(Uuid::new_v4())
            .await;

        assert_eq!(result.unwrap_err(), AccountRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn update_profile_phone_clash_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_user_info_phone_active\""
                    .to_string(),
            )])
            .into_connection();

        let patch = ProfilePatch {
            phone: Some("0901234567".to_string()),
            ..Default::default()
        };
        let result = AccountRepositoryPostgres::new(Arc::new(db))
            .update_profile(Uuid::new_v4(), patch)
            .await;

        assert_eq!(result.unwrap_err(), AccountRepositoryError::PhoneAlreadyInUse);
    }

    #[tokio::test]
    async fn soft_delete_flags_both_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let result = AccountRepositoryPostgres::new(Arc::new(db))
            .soft_delete(Uuid::new_v4())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn soft_delete_of_missing_account_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let result = AccountRepositoryPostgres::new(Arc::new(db))
            .soft_delete(Uuid::new_v4())
            .await;

        assert_eq!(result.unwrap_err(), AccountRepositoryError::NotFound);
    }
}
