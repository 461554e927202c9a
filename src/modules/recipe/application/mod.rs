pub mod domain;
pub mod ports;
pub mod recipe_use_cases;
pub mod services;
