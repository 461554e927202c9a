mod activate;
mod change_password;
mod forgot_password;
mod google;
mod login;
mod logout;
mod refresh;
mod register;
mod request_activation;

use actix_web::web;

pub use activate::activate_handler;
pub use change_password::change_password_handler;
pub use forgot_password::{request_password_reset_handler, reset_password_handler};
pub use google::{google_callback_handler, google_login_handler};
pub use login::login_handler;
pub use logout::logout_handler;
pub use refresh::refresh_handler;
pub use register::register_handler;
pub use request_activation::request_activation_handler;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_handler)
        .service(register_handler)
        .service(activate_handler)
        .service(request_activation_handler)
        .service(request_password_reset_handler)
        .service(reset_password_handler)
        .service(refresh_handler)
        .service(change_password_handler)
        .service(logout_handler)
        .service(google_login_handler)
        .service(google_callback_handler);
}
