use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create hubs table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Hubs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hubs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Hubs::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Hubs::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Hubs::Address).text().not_null())
                    .col(ColumnDef::new(Hubs::City).string_len(100).not_null())
                    .col(ColumnDef::new(Hubs::State).string_len(100).not_null())
                    .col(ColumnDef::new(Hubs::Pincode).string_len(20).not_null())
                    .col(ColumnDef::new(Hubs::Phone).string_len(30))
                    .col(ColumnDef::new(Hubs::Email).string_len(255))
                    .col(
                        ColumnDef::new(Hubs::Capacity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Hubs::Status)
                            .string_len(16)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Hubs::OpenTime)
                            .string_len(5)
                            .not_null()
                            .default("09:00"),
                    )
                    .col(
                        ColumnDef::new(Hubs::CloseTime)
                            .string_len(5)
                            .not_null()
                            .default("18:00"),
                    )
                    .col(
                        ColumnDef::new(Hubs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Hubs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hubs_owner_id")
                            .from(Hubs::Table, Hubs::OwnerId)
                            .to(Users::Table, Users::Id)
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
                CREATE INDEX IF NOT EXISTS idx_hubs_owner_id
                ON hubs (owner_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_hubs_updated_at
                BEFORE UPDATE ON hubs
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_hubs_updated_at ON hubs;")
            .await?;

        manager
            .drop_table(Table::drop().table(Hubs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Hubs {
    Table,
    Id,
    OwnerId,
    Name,
    Address,
    City,
    State,
    Pincode,
    Phone,
    Email,
    Capacity,
    Status,
    OpenTime,
    CloseTime,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
