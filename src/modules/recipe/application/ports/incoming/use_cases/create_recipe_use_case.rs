use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::modules::recipe::application::domain::entities::{
    CreatedRecipe, Difficulty, IngredientLine, NewRecipe,
};
use crate::shared::validation::{char_len, is_http_url};

//
// ──────────────────────────────────────────────────────────
// Create Recipe Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateRecipeCommandError {
    #[error("Name is required")]
    TitleRequired,

    #[error("Name must be less than 150 characters")]
    TitleTooLong,

    #[error("Description is required")]
    DescriptionRequired,

    #[error("Description must be less than 255 characters")]
    DescriptionTooLong,

    #[error("Instructions are required")]
    InstructionsRequired,

    #[error("Image URL must be a valid URL")]
    InvalidImageUrl,

    #[error("Video URL must be a valid URL")]
    InvalidVideoUrl,

    #[error("Cooking time must be a positive integer, at least 1 minute (unit: minutes)")]
    InvalidCookingTime,

    #[error("Difficulty must be one of: EASY, MEDIUM, HARD")]
    InvalidDifficulty,

    #[error("At least one ingredient is required")]
    NoIngredients,

    #[error("Each ingredientId must be a valid UUID")]
    InvalidIngredientId,

    #[error("Quantity must be greater than 0")]
    InvalidQuantity,

    #[error("Unit must be a non-empty string")]
    EmptyUnit,

    #[error("At least one tag Id is required")]
    NoTags,

    #[error("Each tag Id must be a valid UUID")]
    InvalidTagId,
}

/// Raw ingredient line as it arrives in the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IngredientLineInput {
    pub ingredient_id: String,
    pub quantity: f64,
    pub unit: String,
}

/// Raw body of `POST /api/recipes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateRecipeInput {
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub image_url: String,
    pub video_url: Option<String>,
    pub cooking_time: i64,
    pub difficulty: String,
    pub ingredients: Vec<IngredientLineInput>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateRecipeCommand {
    title: String,
    description: String,
    instructions: String,
    image_url: String,
    video_url: Option<String>,
    cooking_time: i32,
    difficulty: Difficulty,
    ingredients: Vec<IngredientLine>,
    tag_ids: Vec<Uuid>,
}

impl CreateRecipeCommand {
    pub fn new(input: CreateRecipeInput) -> Result<Self, CreateRecipeCommandError> {
        use CreateRecipeCommandError as E;

        let title = input.title.trim();
        if title.is_empty() {
            return Err(E::TitleRequired);
        }
        if char_len(title) > 150 {
            return Err(E::TitleTooLong);
        }

        let description = input.description.trim();
        if description.is_empty() {
            return Err(E::DescriptionRequired);
        }
        if char_len(description) > 255 {
            return Err(E::DescriptionTooLong);
        }

        let instructions = input.instructions.trim();
        if instructions.is_empty() {
            return Err(E::InstructionsRequired);
        }

        let image_url = input.image_url.trim();
        if !is_http_url(image_url) {
            return Err(E::InvalidImageUrl);
        }

        let video_url = match input.video_url.as_deref().map(str::trim) {
            Some(url) if !is_http_url(url) => return Err(E::InvalidVideoUrl),
            other => other.map(str::to_string),
        };

        let cooking_time = i32::try_from(input.cooking_time)
            .ok()
            .filter(|t| *t >= 1)
            .ok_or(E::InvalidCookingTime)?;

        let difficulty: Difficulty = input
            .difficulty
            .parse()
            .map_err(|_| E::InvalidDifficulty)?;

        if input.ingredients.is_empty() {
            return Err(E::NoIngredients);
        }
        let ingredients = input
            .ingredients
            .iter()
            .map(|line| {
                let ingredient_id =
                    Uuid::parse_str(line.ingredient_id.trim()).map_err(|_| E::InvalidIngredientId)?;
                if line.quantity.is_nan() || line.quantity <= 0.0 {
                    return Err(E::InvalidQuantity);
                }
                let unit = line.unit.trim();
                if unit.is_empty() {
                    return Err(E::EmptyUnit);
                }
                Ok(IngredientLine {
                    ingredient_id,
                    quantity: line.quantity,
                    unit: unit.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if input.tags.is_empty() {
            return Err(E::NoTags);
        }
        let mut tag_ids: Vec<Uuid> = Vec::with_capacity(input.tags.len());
        for raw in &input.tags {
            let id = Uuid::parse_str(raw.trim()).map_err(|_| E::InvalidTagId)?;
            // (recipe_id, tag_id) is the join table's key.
            if !tag_ids.contains(&id) {
                tag_ids.push(id);
            }
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
            instructions: instructions.to_string(),
            image_url: image_url.to_string(),
            video_url,
            cooking_time,
            difficulty,
            ingredients,
            tag_ids,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn tag_ids(&self) -> &[Uuid] {
        &self.tag_ids
    }

    pub fn ingredients(&self) -> &[IngredientLine] {
        &self.ingredients
    }

    pub fn into_new_recipe(self, creator_id: Uuid) -> NewRecipe {
        NewRecipe {
            creator_id,
            title: self.title,
            description: self.description,
            instructions: self.instructions,
            image_url: self.image_url,
            video_url: self.video_url,
            cooking_time: self.cooking_time,
            difficulty: self.difficulty,
            ingredients: self.ingredients,
            tag_ids: self.tag_ids,
        }
    }
}

impl<'de> Deserialize<'de> for CreateRecipeCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = CreateRecipeInput::deserialize(deserializer)?;
        CreateRecipeCommand::new(input).map_err(serde::de::Error::custom)
    }
}

//
// ──────────────────────────────────────────────────────────
// Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateRecipeError {
    #[error("Ingredients not found: {0}")]
    IngredientsNotFound(String),

    #[error("Tags not found: {0}")]
    TagsNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateRecipeUseCase: Send + Sync {
    async fn execute(
        &self,
        creator_id: Uuid,
        command: CreateRecipeCommand,
    ) -> Result<CreatedRecipe, CreateRecipeError>;
}
