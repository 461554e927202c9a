mod create_recipe_service;
mod get_recipes_service;

pub use create_recipe_service::CreateRecipeService;
pub use get_recipes_service::GetRecipesService;
