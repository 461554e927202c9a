pub mod api;
pub mod catalog;
pub mod db;
pub mod pagination;
pub mod validation;
