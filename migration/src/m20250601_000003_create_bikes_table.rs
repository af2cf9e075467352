use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create bikes table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Bikes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bikes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    // Nullable: a deleted listing keeps its row but loses its owner
                    .col(ColumnDef::new(Bikes::OwnerId).uuid())
                    .col(ColumnDef::new(Bikes::Brand).string_len(100).not_null())
                    .col(ColumnDef::new(Bikes::Model).string_len(100).not_null())
                    .col(ColumnDef::new(Bikes::Image).text().not_null())
                    .col(ColumnDef::new(Bikes::Year).integer().not_null())
                    .col(ColumnDef::new(Bikes::Category).string_len(50).not_null())
                    .col(ColumnDef::new(Bikes::SeatingCapacity).integer().not_null())
                    .col(ColumnDef::new(Bikes::FuelType).string_len(30).not_null())
                    .col(
                        ColumnDef::new(Bikes::Transmission)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bikes::PricePerDay).big_integer().not_null())
                    .col(ColumnDef::new(Bikes::PricePerHour).big_integer())
                    .col(ColumnDef::new(Bikes::Location).string_len(150).not_null())
                    .col(ColumnDef::new(Bikes::Description).text().not_null())
                    .col(
                        ColumnDef::new(Bikes::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Bikes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Bikes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bikes_owner_id")
                            .from(Bikes::Table, Bikes::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bikes_owner_id
                ON bikes (owner_id);
                "#,
            )
            .await?;

        // Catalog and availability search only look at listed bikes
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bikes_listed_location
                ON bikes (location)
                WHERE is_available = true AND owner_id IS NOT NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_bikes_updated_at
                BEFORE UPDATE ON bikes
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
                DROP TRIGGER IF EXISTS update_bikes_updated_at ON bikes;
                DROP INDEX IF EXISTS idx_bikes_owner_id;
                DROP INDEX IF EXISTS idx_bikes_listed_location;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bikes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bikes {
    Table,
    Id,
    OwnerId,
    Brand,
    Model,
    Image,
    Year,
    Category,
    SeatingCapacity,
    FuelType,
    Transmission,
    PricePerDay,
    PricePerHour,
    Location,
    Description,
    IsAvailable,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
