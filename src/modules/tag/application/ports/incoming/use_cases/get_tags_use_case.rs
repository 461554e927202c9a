use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::tag::application::domain::entities::Tag;
use crate::shared::pagination::{PageRequest, Paginated};

/// Raw query string of `GET /api/tags`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetTagsParams {
    pub page_index: Option<String>,
    pub page_size: Option<String>,
    pub keyword: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetTagsQuery {
    page: PageRequest,
    keyword: Option<String>,
}

impl GetTagsQuery {
    pub fn parse(params: &GetTagsParams) -> Result<Self, GetTagsError> {
        let page = PageRequest::parse(params.page_index.as_deref(), params.page_size.as_deref())
            .map_err(|e| GetTagsError::InvalidQuery(e.to_string()))?;

        let keyword = params
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        Ok(Self { page, keyword })
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetTagsError {
    #[error("{0}")]
    InvalidQuery(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetTagsUseCase: Send + Sync {
    async fn execute(&self, query: GetTagsQuery) -> Result<Paginated<Tag>, GetTagsError>;
}
