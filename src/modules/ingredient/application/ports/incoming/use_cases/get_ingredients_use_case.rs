use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::ingredient::application::domain::entities::Ingredient;
use crate::modules::ingredient::application::ports::outgoing::IngredientListFilter;
use crate::shared::pagination::{PageRequest, Paginated};

/// Raw query string of `GET /api/ingredients`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetIngredientsParams {
    pub page_index: Option<String>,
    pub page_size: Option<String>,
    pub keyword: Option<String>,
    #[serde(rename = "type")]
    pub ingredient_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetIngredientsQuery {
    page: PageRequest,
    filter: IngredientListFilter,
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl GetIngredientsQuery {
    pub fn parse(params: &GetIngredientsParams) -> Result<Self, GetIngredientsError> {
        let page = PageRequest::parse(params.page_index.as_deref(), params.page_size.as_deref())
            .map_err(|e| GetIngredientsError::InvalidQuery(e.to_string()))?;

        Ok(Self {
            page,
            filter: IngredientListFilter {
                keyword: non_blank(params.keyword.as_deref()),
                ingredient_type: non_blank(params.ingredient_type.as_deref()),
            },
        })
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn filter(&self) -> &IngredientListFilter {
        &self.filter
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetIngredientsError {
    #[error("{0}")]
    InvalidQuery(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetIngredientsUseCase: Send + Sync {
    async fn execute(
        &self,
        query: GetIngredientsQuery,
    ) -> Result<Paginated<Ingredient>, GetIngredientsError>;
}
