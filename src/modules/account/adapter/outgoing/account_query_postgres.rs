use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::account::adapter::outgoing::account_mapper::{
    to_account, to_list_item, to_profile,
};
use crate::modules::account::adapter::outgoing::sea_orm_entity::{accounts, user_info};
use crate::modules::account::application::domain::entities::Account;
use crate::modules::account::application::ports::outgoing::{
    AccountListFilter, AccountListItem, AccountProfileView, AccountQuery, AccountQueryError,
};
use crate::shared::db::contains_pattern;
use crate::shared::pagination::PageRequest;

#[derive(Clone)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_live(
        &self,
        column: accounts::Column,
        value: sea_orm::Value,
    ) -> Result<Option<Account>, AccountQueryError> {
        accounts::Entity::find()
            .filter(column.eq(value))
            .filter(accounts::Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_account)
            .transpose()
            .map_err(AccountQueryError::DatabaseError)
    }
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountQueryError> {
        self.find_live(accounts::Column::Id, id.into()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError> {
        self.find_live(accounts::Column::Email, email.into()).await
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountQueryError> {
        self.find_live(accounts::Column::Username, username.into())
            .await
    }

    async fn get_profile(&self, id: Uuid) -> Result<Option<AccountProfileView>, AccountQueryError> {
        let row = accounts::Entity::find_by_id(id)
            .filter(accounts::Column::IsDeleted.eq(false))
            .find_also_related(user_info::Entity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match row {
            Some((account, Some(info))) => to_profile(account, info)
                .map(Some)
                .map_err(AccountQueryError::DatabaseError),
            _ => Ok(None),
        }
    }

    async fn get_detail(&self, id: Uuid) -> Result<Option<AccountListItem>, AccountQueryError> {
        accounts::Entity::find_by_id(id)
            .find_also_related(user_info::Entity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|(account, info)| to_list_item(account, info))
            .transpose()
            .map_err(AccountQueryError::DatabaseError)
    }

    async fn list(
        &self,
        filter: AccountListFilter,
        page: PageRequest,
    ) -> Result<(Vec<AccountListItem>, u64), AccountQueryError> {
        let mut query =
            accounts::Entity::find().filter(accounts::Column::IsDeleted.eq(filter.is_deleted));

        if !filter.excluded_roles.is_empty() {
            query = query.filter(
                accounts::Column::Role.is_not_in(filter.excluded_roles.iter().map(|r| r.as_str())),
            );
        }

        if let Some(keyword) = &filter.keyword {
            let pattern = contains_pattern(keyword.trim());
            query = query.filter(Expr::col(accounts::Column::Email).ilike(&pattern));
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .order_by_desc(accounts::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.page_size())
            .find_also_related(user_info::Entity)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = rows
            .into_iter()
            .map(|(account, info)| to_list_item(account, info))
            .collect::<Result<Vec<_>, _>>()
            .map_err(AccountQueryError::DatabaseError)?;

        Ok((items, total))
    }
}

fn map_db_err(e: DbErr) -> AccountQueryError {
    AccountQueryError::DatabaseError(e.to_string())
}
