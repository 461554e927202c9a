pub mod ingredient_query;
pub mod ingredient_repository;

pub use ingredient_query::{IngredientListFilter, IngredientQuery, IngredientQueryError};
pub use ingredient_repository::{IngredientRepository, IngredientRepositoryError};
