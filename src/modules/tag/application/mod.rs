pub mod domain;
pub mod ports;
pub mod services;
pub mod tag_use_cases;
