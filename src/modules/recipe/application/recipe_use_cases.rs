use std::sync::Arc;

use crate::modules::recipe::application::ports::incoming::use_cases::{
    CreateRecipeUseCase, GetRecipesUseCase,
};

#[derive(Clone)]
pub struct RecipeUseCases {
    pub create: Arc<dyn CreateRecipeUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetRecipesUseCase + Send + Sync>,
}
