mod create_ingredients_use_case;
mod get_ingredients_use_case;
mod remove_ingredients_use_case;

pub use create_ingredients_use_case::{
    CreateIngredientsCommand, CreateIngredientsCommandError, CreateIngredientsError,
    CreateIngredientsOutcome, CreateIngredientsUseCase,
};
pub use get_ingredients_use_case::{
    GetIngredientsError, GetIngredientsParams, GetIngredientsQuery, GetIngredientsUseCase,
};
pub use remove_ingredients_use_case::{RemoveIngredientsError, RemoveIngredientsUseCase};
