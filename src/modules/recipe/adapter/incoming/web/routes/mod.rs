use actix_web::web;

mod create_recipe;
mod get_recipes;

pub use create_recipe::create_recipe_handler;
pub use get_recipes::get_recipes_handler;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_recipe_handler)
        .service(get_recipes_handler);
}
