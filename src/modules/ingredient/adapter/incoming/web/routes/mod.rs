use actix_web::web;

mod create_ingredients;
mod get_ingredients;
mod remove_ingredients;

pub use create_ingredients::create_ingredients_handler;
pub use get_ingredients::get_ingredients_handler;
pub use remove_ingredients::remove_ingredients_handler;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_ingredients_handler)
        .service(get_ingredients_handler)
        .service(remove_ingredients_handler);
}
