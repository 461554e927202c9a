mod create_ingredients_service;
mod get_ingredients_service;
mod remove_ingredients_service;

pub use create_ingredients_service::CreateIngredientsService;
pub use get_ingredients_service::GetIngredientsService;
pub use remove_ingredients_service::RemoveIngredientsService;
