pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_accounts_table;
mod m20250601_000002_create_user_info_table;
mod m20250601_000003_create_tags_table;
mod m20250601_000004_create_ingredients_table;
mod m20250601_000005_create_recipes_table;
mod m20250601_000006_create_recipe_ingredients_table;
mod m20250601_000007_create_recipe_tags_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_accounts_table::Migration),
            Box::new(m20250601_000002_create_user_info_table::Migration),
            Box::new(m20250601_000003_create_tags_table::Migration),
            Box::new(m20250601_000004_create_ingredients_table::Migration),
            Box::new(m20250601_000005_create_recipes_table::Migration),
            Box::new(m20250601_000006_create_recipe_ingredients_table::Migration),
            Box::new(m20250601_000007_create_recipe_tags_table::Migration),
        ]
    }
}
