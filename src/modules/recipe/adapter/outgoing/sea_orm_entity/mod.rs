pub mod recipe_ingredients;
pub mod recipe_tags;
pub mod recipes;
