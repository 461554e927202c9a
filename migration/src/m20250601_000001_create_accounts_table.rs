use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Accounts::Email).string_len(100))
                    .col(ColumnDef::new(Accounts::Username).string_len(100))
                    .col(ColumnDef::new(Accounts::Password).string_len(255))
                    .col(
                        ColumnDef::new(Accounts::Role)
                            .string_len(10)
                            .not_null()
                            .default("USER")
                            .check(Expr::cust("role IN ('USER', 'STAFF', 'ADMIN')")),
                    )
                    .col(
                        ColumnDef::new(Accounts::AccountType)
                            .string_len(10)
                            .not_null()
                            .default("LOCAL")
                            .check(Expr::cust("account_type IN ('LOCAL', 'GOOGLE')")),
                    )
                    .col(
                        ColumnDef::new(Accounts::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Accounts::IsBanned)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Accounts::CodeId).string_len(6))
                    .col(ColumnDef::new(Accounts::CodeExpired).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Accounts::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Accounts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // codeId and codeExpired are either both set or both null
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE accounts
                ADD CONSTRAINT chk_accounts_otp_pair
                CHECK ((code_id IS NULL) = (code_expired IS NULL));
                "#,
            )
            .await?;

        // Soft-deleted accounts release their email and username
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_accounts_email_active
                ON accounts (email)
                WHERE is_deleted = false;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_accounts_username_active
                ON accounts (username)
                WHERE is_deleted = false;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_accounts_created_at
                ON accounts (created_at DESC);
                "#,
            )
            .await?;

        // Shared by every table with an updated_at column
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_accounts_updated_at
                BEFORE UPDATE ON accounts
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_accounts_updated_at ON accounts")
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_accounts_email_active;
                DROP INDEX IF EXISTS idx_accounts_username_active;
                DROP INDEX IF EXISTS idx_accounts_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Email,
    Username,
    Password,
    Role,
    AccountType,
    IsActive,
    IsBanned,
    CodeId,
    CodeExpired,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
