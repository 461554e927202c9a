use std::sync::Arc;

use crate::modules::ingredient::application::ports::incoming::use_cases::{
    CreateIngredientsUseCase, GetIngredientsUseCase, RemoveIngredientsUseCase,
};

#[derive(Clone)]
pub struct IngredientUseCases {
    pub create: Arc<dyn CreateIngredientsUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetIngredientsUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveIngredientsUseCase + Send + Sync>,
}
