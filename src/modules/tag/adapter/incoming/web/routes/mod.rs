use actix_web::web;

mod create_tags;
mod get_tags;
mod remove_tags;

pub use create_tags::create_tags_handler;
pub use get_tags::get_tags_handler;
pub use remove_tags::remove_tags_handler;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_tags_handler)
        .service(get_tags_handler)
        .service(remove_tags_handler);
}
