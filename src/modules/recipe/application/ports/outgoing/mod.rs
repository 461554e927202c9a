pub mod recipe_query;
pub mod recipe_repository;

pub use recipe_query::{RecipeQuery, RecipeQueryError};
pub use recipe_repository::{RecipeRepository, RecipeRepositoryError};
