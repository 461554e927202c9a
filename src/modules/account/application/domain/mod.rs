pub mod entities;
pub mod fields;
