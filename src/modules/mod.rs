pub mod account;
pub mod auth;
pub mod email;
pub mod ingredient;
pub mod recipe;
pub mod tag;
