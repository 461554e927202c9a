use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::recipe::application::domain::entities::{
    CreatedRecipe, CreatorSummary, Difficulty, NewRecipe, RecipeFilter, RecipeIngredientView,
    RecipeTagView, RecipeView,
};
use crate::modules::recipe::application::ports::outgoing::{
    RecipeQuery, RecipeQueryError, RecipeRepository, RecipeRepositoryError,
};
use crate::shared::pagination::PageRequest;

/// A live recipe with one creator, one ingredient line and one tag.
pub fn recipe_view(title: &str, difficulty: Difficulty) -> RecipeView {
    let now = Utc::now();
    RecipeView {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} description"),
        instructions: "Mix and cook.".to_string(),
        image_url: "https://cdn.example.com/recipe.jpg".to_string(),
        video_url: None,
        cooking_time: 20,
        difficulty,
        creator: Some(CreatorSummary {
            id: Uuid::new_v4(),
            username: Some("cookmaster".to_string()),
            first_name: Some("Ana".to_string()),
            last_name: Some("Tran".to_string()),
            avatar_url: None,
        }),
        ingredients: vec![RecipeIngredientView {
            id: Uuid::new_v4(),
            name: "Egg".to_string(),
            ingredient_type: "Dairy".to_string(),
            image_url: None,
            quantity: Some(2.0),
            unit: "pcs".to_string(),
        }],
        tags: vec![RecipeTagView {
            id: Uuid::new_v4(),
            name: "Quick".to_string(),
        }],
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct InMemoryRecipeStore {
    ingredient_ids: Arc<Mutex<Vec<Uuid>>>,
    tag_ids: Arc<Mutex<Vec<Uuid>>>,
    recipes: Arc<Mutex<Vec<NewRecipe>>>,
    views: Arc<Mutex<Vec<RecipeView>>>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ingredients(self, ids: &[Uuid]) -> Self {
        self.ingredient_ids.lock().unwrap().extend_from_slice(ids);
        self
    }

    pub fn with_tags(self, ids: &[Uuid]) -> Self {
        self.tag_ids.lock().unwrap().extend_from_slice(ids);
        self
    }

    pub fn with_view(self, view: RecipeView) -> Self {
        self.views.lock().unwrap().push(view);
        self
    }

    pub fn recipes(&self) -> Vec<NewRecipe> {
        self.recipes.lock().unwrap().clone()
    }

    fn matches(view: &RecipeView, filter: &RecipeFilter) -> bool {
        let keyword_ok = filter.keyword.as_deref().map_or(true, |k| {
            let k = k.to_lowercase();
            [&view.title, &view.description, &view.instructions]
                .iter()
                .any(|field| field.to_lowercase().contains(&k))
        });
        let tags_ok = filter.tag_ids.is_empty()
            || view.tags.iter().any(|t| filter.tag_ids.contains(&t.id));
        let ingredients_ok = filter.ingredient_ids.is_empty()
            || view
                .ingredients
                .iter()
                .any(|i| filter.ingredient_ids.contains(&i.id));
        let creator_ok = filter
            .creator_id
            .map_or(true, |id| view.creator.as_ref().map(|c| c.id) == Some(id));

        keyword_ok
            && filter.difficulty.map_or(true, |d| view.difficulty == d)
            && tags_ok
            && ingredients_ok
            && creator_ok
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeStore {
    async fn create_with_associations(
        &self,
        recipe: NewRecipe,
    ) -> Result<CreatedRecipe, RecipeRepositoryError> {
        let known_ingredients = self.ingredient_ids.lock().unwrap().clone();
        let missing: Vec<Uuid> = recipe
            .ingredients
            .iter()
            .map(|line| line.ingredient_id)
            .filter(|id| !known_ingredients.contains(id))
            .collect();
        if !missing.is_empty() {
            return Err(RecipeRepositoryError::IngredientsNotFound(missing));
        }

        let known_tags = self.tag_ids.lock().unwrap().clone();
        let missing: Vec<Uuid> = recipe
            .tag_ids
            .iter()
            .copied()
            .filter(|id| !known_tags.contains(id))
            .collect();
        if !missing.is_empty() {
            return Err(RecipeRepositoryError::TagsNotFound(missing));
        }

        let created = CreatedRecipe {
            id: Uuid::new_v4(),
            title: recipe.title.clone(),
        };
        self.recipes.lock().unwrap().push(recipe);
        Ok(created)
    }
}

#[async_trait]
impl RecipeQuery for InMemoryRecipeStore {
    async fn list(
        &self,
        filter: &RecipeFilter,
        page: PageRequest,
    ) -> Result<(Vec<RecipeView>, u64), RecipeQueryError> {
        let mut rows: Vec<RecipeView> = self
            .views
            .lock()
            .unwrap()
            .iter()
            .filter(|v| Self::matches(v, filter))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = rows.len() as u64;
        let data = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.page_size() as usize)
            .collect();
        Ok((data, total))
    }
}
