use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::modules::ingredient::application::domain::entities::{
    Ingredient, IngredientInput, IngredientInputError,
};

//
// ──────────────────────────────────────────────────────────
// Create Ingredients Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateIngredientsCommand {
    items: Vec<IngredientInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateIngredientsCommandError {
    #[error("At least one ingredient is required")]
    Empty,

    #[error(transparent)]
    InvalidItem(#[from] IngredientInputError),
}

impl CreateIngredientsCommand {
    pub fn new(items: Vec<IngredientInput>) -> Result<Self, CreateIngredientsCommandError> {
        if items.is_empty() {
            return Err(CreateIngredientsCommandError::Empty);
        }
        Ok(Self { items })
    }

    pub fn into_items(self) -> Vec<IngredientInput> {
        self.items
    }
}

impl<'de> Deserialize<'de> for CreateIngredientsCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct Helper {
            name: String,
            #[serde(rename = "type")]
            ingredient_type: String,
            image_url: Option<String>,
        }

        let raw = Vec::<Helper>::deserialize(deserializer)?;
        let items = raw
            .iter()
            .map(|h| IngredientInput::new(&h.name, &h.ingredient_type, h.image_url.as_deref()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(serde::de::Error::custom)?;

        CreateIngredientsCommand::new(items).map_err(serde::de::Error::custom)
    }
}

//
// ──────────────────────────────────────────────────────────
// Outcome / Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateIngredientsOutcome {
    pub message: String,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateIngredientsError {
    #[error("{message}")]
    NothingCreated {
        message: String,
        existing: Vec<Ingredient>,
    },

    #[error("Ingredient name is already in use")]
    Conflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateIngredientsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateIngredientsCommand,
    ) -> Result<CreateIngredientsOutcome, CreateIngredientsError>;
}
