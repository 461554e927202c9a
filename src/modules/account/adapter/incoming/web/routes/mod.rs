mod account_detail;
mod create_account;
mod handle_ban;
mod list_accounts;
mod profile;

use actix_web::web;

pub use account_detail::{delete_account_handler, get_account_handler, update_account_handler};
pub use create_account::create_account_handler;
pub use handle_ban::handle_ban_handler;
pub use list_accounts::list_accounts_handler;
pub use profile::{get_profile_handler, update_profile_handler};

/// `/api/accounts/profile` is registered ahead of `/api/accounts/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_profile_handler)
        .service(update_profile_handler)
        .service(create_account_handler)
        .service(list_accounts_handler)
        .service(handle_ban_handler)
        .service(get_account_handler)
        .service(update_account_handler)
        .service(delete_account_handler);
}
