use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create bookings table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Bookings::BikeId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::UserId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::PickupDate).date().not_null())
                    .col(ColumnDef::new(Bookings::ReturnDate).date().not_null())
                    .col(ColumnDef::new(Bookings::PickupSlot).string_len(5).not_null())
                    .col(ColumnDef::new(Bookings::ReturnSlot).string_len(5).not_null())
                    .col(ColumnDef::new(Bookings::PickupAt).timestamp().not_null())
                    .col(ColumnDef::new(Bookings::ReturnAt).timestamp().not_null())
                    .col(
                        ColumnDef::new(Bookings::TotalHours)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Bookings::Price).big_integer().not_null())
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Bookings::PaymentMethod)
                            .string_len(16)
                            .not_null()
                            .default("offline"),
                    )
                    .col(
                        ColumnDef::new(Bookings::PaidAmount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Bookings::PendingAmount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Bookings::PaymentStatus)
                            .string_len(16)
                            .not_null()
                            .default("unpaid"),
                    )
                    .col(ColumnDef::new(Bookings::HubId).uuid())
                    .col(ColumnDef::new(Bookings::Address).text())
                    .col(ColumnDef::new(Bookings::Phone).string_len(30))
                    .col(ColumnDef::new(Bookings::PickupLocation).text())
                    .col(ColumnDef::new(Bookings::GatewayPaymentId).string_len(100))
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Bookings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_bike_id")
                            .from(Bookings::Table, Bookings::BikeId)
                            .to(Bikes::Table, Bikes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_user_id")
                            .from(Bookings::Table, Bookings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_owner_id")
                            .from(Bookings::Table, Bookings::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_hub_id")
                            .from(Bookings::Table, Bookings::HubId)
                            .to(Hubs::Table, Hubs::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Overlap scan: live bookings of one bike by interval
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bookings_bike_window
                ON bookings (bike_id, pickup_at, return_at)
                WHERE status <> 'cancelled';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bookings_user_created
                ON bookings (user_id, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bookings_owner_created
                ON bookings (owner_id, created_at DESC);
                "#,
            )
            .await?;

        // Amounts never go negative
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE bookings
                ADD CONSTRAINT chk_bookings_amounts
                CHECK (paid_amount >= 0 AND pending_amount >= 0 AND price >= 0);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_bookings_updated_at
                BEFORE UPDATE ON bookings
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
                DROP TRIGGER IF EXISTS update_bookings_updated_at ON bookings;
                DROP INDEX IF EXISTS idx_bookings_bike_window;
                DROP INDEX IF EXISTS idx_bookings_user_created;
                DROP INDEX IF EXISTS idx_bookings_owner_created;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    BikeId,
    UserId,
    OwnerId,
    PickupDate,
    ReturnDate,
    PickupSlot,
    ReturnSlot,
    PickupAt,
    ReturnAt,
    TotalHours,
    Price,
    Status,
    PaymentMethod,
    PaidAmount,
    PendingAmount,
    PaymentStatus,
    HubId,
    Address,
    Phone,
    PickupLocation,
    GatewayPaymentId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Bikes {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Hubs {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
