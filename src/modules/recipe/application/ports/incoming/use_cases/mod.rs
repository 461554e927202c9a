mod create_recipe_use_case;
mod get_recipes_use_case;

#[cfg(test)]
pub(crate) use create_recipe_use_case::test_inputs;
pub use create_recipe_use_case::{
    CreateRecipeCommand, CreateRecipeCommandError, CreateRecipeError, CreateRecipeInput,
    CreateRecipeUseCase, IngredientLineInput,
};
pub use get_recipes_use_case::{
    GetRecipesError, GetRecipesParams, GetRecipesQuery, GetRecipesUseCase,
};
