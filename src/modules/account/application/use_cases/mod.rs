pub mod activate_account;
pub mod change_password;
pub mod create_account;
pub mod delete_account;
pub mod get_account;
pub mod get_profile;
pub mod list_accounts;
pub mod register_account;
pub mod request_activation;
pub mod request_password_reset;
pub mod reset_password;
pub mod resolve_oauth_account;
pub mod toggle_ban;
pub mod update_profile;
