use async_trait::async_trait;
use chrono::NaiveDateTime;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::bookings::{Column, Entity as BookingEntity, Model as BookingModel};
use crate::auth::application::domain::entities::UserId;
use crate::booking::application::domain::{Booking, BookingStatus};
use crate::booking::application::ports::outgoing::{BookingQuery, BookingQueryError};

#[derive(Clone, Debug)]
pub struct BookingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

fn to_domain(model: BookingModel) -> Result<Booking, BookingQueryError> {
    model.to_domain().map_err(BookingQueryError::DatabaseError)
}

impl BookingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch(&self, select: Select<BookingEntity>) -> Result<Vec<Booking>, BookingQueryError> {
        select
            .all(&*self.db)
            .await
            .map_err(|e| BookingQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(to_domain)
            .collect()
    }
}

#[async_trait]
impl BookingQuery for BookingQueryPostgres {
    async fn find_by_id(&self, booking_id: Uuid) -> Result<Option<Booking>, BookingQueryError> {
        BookingEntity::find_by_id(booking_id)
            .one(&*self.db)
            .await
            .map_err(|e| BookingQueryError::DatabaseError(e.to_string()))?
            .map(to_domain)
            .transpose()
    }

    async fn list_live_for_bikes(
        &self,
        bike_ids: &[Uuid],
        ends_after: NaiveDateTime,
    ) -> Result<Vec<Booking>, BookingQueryError> {
        if bike_ids.is_empty() {
            return Ok(Vec::new());
        }

        // Served by idx_bookings_bike_window
        self.fetch(
            BookingEntity::find()
                .filter(Column::BikeId.is_in(bike_ids.to_vec()))
                .filter(Column::Status.ne(BookingStatus::Cancelled.as_str()))
                .filter(Column::ReturnAt.gt(ends_after))
                .order_by_asc(Column::PickupAt),
        )
        .await
    }

    async fn list_by_user(&self, user: UserId) -> Result<Vec<Booking>, BookingQueryError> {
        self.fetch(
            BookingEntity::find()
                .filter(Column::UserId.eq(user.value()))
                .order_by_desc(Column::CreatedAt),
        )
        .await
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Booking>, BookingQueryError> {
        self.fetch(
            BookingEntity::find()
                .filter(Column::OwnerId.eq(owner.value()))
                .order_by_desc(Column::CreatedAt),
        )
        .await
    }
}
