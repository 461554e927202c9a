use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::account::application::domain::entities::Role;
use crate::modules::account::application::ports::outgoing::{
    AccountListFilter, AccountListItem, AccountQuery,
};
use crate::shared::pagination::{PageRequest, Paginated};

/// Raw query string of `GET /accounts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAccountsParams {
    pub page_index: Option<String>,
    pub page_size: Option<String>,
    pub keyword: Option<String>,
    #[serde(rename = "isDel")]
    pub is_del: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListAccountsQuery {
    page: PageRequest,
    keyword: Option<String>,
    is_deleted: bool,
}

impl ListAccountsQuery {
    pub fn parse(params: &ListAccountsParams) -> Result<Self, ListAccountsError> {
        let page = PageRequest::parse(params.page_index.as_deref(), params.page_size.as_deref())
            .map_err(|e| ListAccountsError::InvalidQuery(e.to_string()))?;

        let is_deleted = match params.is_del.as_deref().map(str::trim) {
            None | Some("f") => false,
            Some("t") => true,
            Some(_) => return Err(ListAccountsError::InvalidDeletedFlag),
        };

        let keyword = params
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        Ok(Self {
            page,
            keyword,
            is_deleted,
        })
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListAccountsError {
    #[error("{0}")]
    InvalidQuery(String),

    #[error("isDel must be 't' or 'f'")]
    InvalidDeletedFlag,

    #[error("Unauthorized role")]
    UnauthorizedRole,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListAccountsUseCase: Send + Sync {
    async fn execute(
        &self,
        requester_role: Role,
        query: ListAccountsQuery,
    ) -> Result<Paginated<AccountListItem>, ListAccountsError>;
}

pub struct ListAccountsUseCase<Q>
where
    Q: AccountQuery,
{
    query: Q,
}

impl<Q> ListAccountsUseCase<Q>
where
    Q: AccountQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListAccountsUseCase for ListAccountsUseCase<Q>
where
    Q: AccountQuery,
{
    async fn execute(
        &self,
        requester_role: Role,
        query: ListAccountsQuery,
    ) -> Result<Paginated<AccountListItem>, ListAccountsError> {
        let excluded_roles = requester_role
            .hidden_roles_when_listing()
            .ok_or(ListAccountsError::UnauthorizedRole)?;

        let filter = AccountListFilter {
            excluded_roles,
            keyword: query.keyword,
            is_deleted: query.is_deleted,
        };

        let (data, total) = self
            .query
            .list(filter, query.page)
            .await
            .map_err(|e| ListAccountsError::RepositoryError(e.to_string()))?;

        Ok(Paginated {
            data,
            pagination: query.page.pagination(total),
        })
    }
}
