pub mod accounts;
pub mod user_info;
