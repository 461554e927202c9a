use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::recipe::application::domain::entities::{Difficulty, RecipeFilter, RecipeView};
use crate::shared::pagination::{PageRequest, Paginated};

/// Raw query string of `GET /api/recipes`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetRecipesParams {
    pub page_index: Option<String>,
    pub page_size: Option<String>,
    pub keyword: Option<String>,
    pub difficulty: Option<String>,
    pub tag_ids: Option<String>,
    pub ingredient_ids: Option<String>,
    pub creator_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetRecipesQuery {
    page: PageRequest,
    filter: RecipeFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetRecipesError {
    #[error("{0}")]
    InvalidQuery(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

const ID_LIST_MESSAGE: &str = "Each ID must be a valid UUID separated by commas";

/// `"a, b,c"` -> ids. Empty segments are ignored.
fn parse_id_list(raw: Option<&str>) -> Result<Vec<Uuid>, GetRecipesError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Uuid::parse_str(s).map_err(|_| GetRecipesError::InvalidQuery(ID_LIST_MESSAGE.into()))
        })
        .collect()
}

impl GetRecipesQuery {
    pub fn parse(params: &GetRecipesParams) -> Result<Self, GetRecipesError> {
        let page = PageRequest::parse(params.page_index.as_deref(), params.page_size.as_deref())
            .map_err(|e| GetRecipesError::InvalidQuery(e.to_string()))?;

        let difficulty = params
            .difficulty
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(str::parse::<Difficulty>)
            .transpose()
            .map_err(|e| GetRecipesError::InvalidQuery(e.to_string()))?;

        let creator_id = params
            .creator_id
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(Uuid::parse_str)
            .transpose()
            .map_err(|_| GetRecipesError::InvalidQuery("Creator Id must be a valid UUID".into()))?;

        let keyword = params
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        Ok(Self {
            page,
            filter: RecipeFilter {
                keyword,
                difficulty,
                tag_ids: parse_id_list(params.tag_ids.as_deref())?,
                ingredient_ids: parse_id_list(params.ingredient_ids.as_deref())?,
                creator_id,
            },
        })
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn filter(&self) -> &RecipeFilter {
        &self.filter
    }
}

#[async_trait]
pub trait GetRecipesUseCase: Send + Sync {
    async fn execute(&self, query: GetRecipesQuery) -> Result<Paginated<RecipeView>, GetRecipesError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_filter() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let creator = Uuid::new_v4();

        let query = GetRecipesQuery::parse(&GetRecipesParams {
            keyword: Some(" soup ".into()),
            difficulty: Some("MEDIUM".into()),
            tag_ids: Some(format!("{a}, {b}")),
            ingredient_ids: Some(format!("{a},")),
            creator_id: Some(creator.to_string()),
            ..Default::default()
        })
        .unwrap();

        let filter = query.filter();
        assert_eq!(filter.keyword.as_deref(), Some("soup"));
        assert_eq!(filter.difficulty, Some(Difficulty::Medium));
        assert_eq!(filter.tag_ids, vec![a, b]);
        assert_eq!(filter.ingredient_ids, vec![a]);
        assert_eq!(filter.creator_id, Some(creator));
    }

    #[test]
    fn bad_id_list_is_rejected() {
        let err = GetRecipesQuery::parse(&GetRecipesParams {
            tag_ids: Some("abc,def".into()),
            ..Default::default()
        })
        .unwrap_err();

        assert_eq!(err.to_string(), ID_LIST_MESSAGE);
    }

    #[test]
    fn bad_difficulty_and_creator_are_rejected() {
        let err = GetRecipesQuery::parse(&GetRecipesParams {
            difficulty: Some("EXTREME".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Difficulty must be one of: EASY, MEDIUM, HARD");

        let err = GetRecipesQuery::parse(&GetRecipesParams {
            creator_id: Some("me".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Creator Id must be a valid UUID");
    }
}
