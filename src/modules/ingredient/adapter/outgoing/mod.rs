pub mod ingredient_query_postgres;
pub mod ingredient_repository_postgres;
pub mod sea_orm_entity;

pub use ingredient_query_postgres::IngredientQueryPostgres;
pub use ingredient_repository_postgres::IngredientRepositoryPostgres;
