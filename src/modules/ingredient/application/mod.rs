pub mod domain;
pub mod ingredient_use_cases;
pub mod ports;
pub mod services;
