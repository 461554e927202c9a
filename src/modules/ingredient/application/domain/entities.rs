use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::catalog::{to_title_case, CatalogRow, NamedInput};
use crate::shared::validation::{char_len, is_http_url};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub ingredient_type: String,
    pub image_url: Option<String>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogRow for Ingredient {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngredientInputError {
    #[error("Ingredient name must not be empty")]
    EmptyName,

    #[error("Ingredient name must not exceed 50 characters")]
    NameTooLong,

    #[error("Ingredient type must not be empty")]
    EmptyType,

    #[error("Ingredient type must not exceed 50 characters")]
    TypeTooLong,

    #[error("Image URL must be a valid URL")]
    InvalidImageUrl,
}

/// One validated element of a bulk create. The name is title-cased; type
/// and image URL are kept as given (trimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientInput {
    name: String,
    ingredient_type: String,
    image_url: Option<String>,
}

impl IngredientInput {
    pub fn new(
        name: &str,
        ingredient_type: &str,
        image_url: Option<&str>,
    ) -> Result<Self, IngredientInputError> {
        let name = to_title_case(name);
        if name.is_empty() {
            return Err(IngredientInputError::EmptyName);
        }
        if char_len(&name) > 50 {
            return Err(IngredientInputError::NameTooLong);
        }

        let ingredient_type = ingredient_type.trim();
        if ingredient_type.is_empty() {
            return Err(IngredientInputError::EmptyType);
        }
        if char_len(ingredient_type) > 50 {
            return Err(IngredientInputError::TypeTooLong);
        }

        let image_url = match image_url.map(str::trim) {
            Some(url) if !is_http_url(url) => return Err(IngredientInputError::InvalidImageUrl),
            other => other.map(str::to_string),
        };

        Ok(Self {
            name,
            ingredient_type: ingredient_type.to_string(),
            image_url,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredient_type(&self) -> &str {
        &self.ingredient_type
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

impl NamedInput for IngredientInput {
    fn name(&self) -> &str {
        &self.name
    }
}
