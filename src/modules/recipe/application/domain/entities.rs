use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Difficulty must be one of: EASY, MEDIUM, HARD")]
pub struct InvalidDifficulty;

impl FromStr for Difficulty {
    type Err = InvalidDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "EASY" => Ok(Difficulty::Easy),
            "MEDIUM" => Ok(Difficulty::Medium),
            "HARD" => Ok(Difficulty::Hard),
            _ => Err(InvalidDifficulty),
        }
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One ingredient line of a recipe being authored.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientLine {
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
}

/// Everything needed to write a recipe and its join rows.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub creator_id: Uuid,
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub image_url: String,
    pub video_url: Option<String>,
    pub cooking_time: i32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<IngredientLine>,
    pub tag_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedRecipe {
    pub id: Uuid,
    pub title: String,
}

//
// ──────────────────────────────────────────────────────────
// List projections
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorSummary {
    pub id: Uuid,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientView {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub ingredient_type: String,
    pub image_url: Option<String>,
    pub quantity: Option<f64>,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeTagView {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub image_url: String,
    pub video_url: Option<String>,
    pub cooking_time: i32,
    pub difficulty: Difficulty,
    pub creator: Option<CreatorSummary>,
    pub ingredients: Vec<RecipeIngredientView>,
    pub tags: Vec<RecipeTagView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filters of the public recipe list. Id sets match recipes linked to any
/// of the given ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub keyword: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub tag_ids: Vec<Uuid>,
    pub ingredient_ids: Vec<Uuid>,
    pub creator_id: Option<Uuid>,
}
