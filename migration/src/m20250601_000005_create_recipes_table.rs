use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Recipes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Recipes::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Recipes::Description).text().not_null())
                    .col(ColumnDef::new(Recipes::Instructions).text().not_null())
                    .col(ColumnDef::new(Recipes::ImageUrl).string_len(500).not_null())
                    .col(ColumnDef::new(Recipes::VideoUrl).string_len(500))
                    .col(
                        ColumnDef::new(Recipes::CookingTime)
                            .integer()
                            .not_null()
                            .check(Expr::cust("cooking_time > 0")),
                    )
                    .col(
                        ColumnDef::new(Recipes::Difficulty)
                            .string_len(10)
                            .not_null()
                            .default("EASY")
                            .check(Expr::cust("difficulty IN ('EASY', 'MEDIUM', 'HARD')")),
                    )
                    .col(ColumnDef::new(Recipes::CreatedById).uuid().not_null())
                    .col(
                        ColumnDef::new(Recipes::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Recipes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Recipes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipes_created_by_id")
                            .from(Recipes::Table, Recipes::CreatedById)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_recipes_created_by_id ON recipes (created_by_id);
                CREATE INDEX idx_recipes_listing ON recipes (created_at DESC) WHERE is_deleted = false;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_recipes_updated_at
                BEFORE UPDATE ON recipes
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_recipes_updated_at ON recipes;
                DROP INDEX IF EXISTS idx_recipes_created_by_id;
                DROP INDEX IF EXISTS idx_recipes_listing;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Recipes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Recipes {
    Table,
    Id,
    Title,
    Description,
    Instructions,
    ImageUrl,
    VideoUrl,
    CookingTime,
    Difficulty,
    CreatedById,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
}
