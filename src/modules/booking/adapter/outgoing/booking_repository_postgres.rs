use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::bookings::{
    ActiveModel as BookingActiveModel, Entity as BookingEntity, Model as BookingModel,
};
use crate::booking::application::domain::{
    Booking, BookingStatus, PaymentLedger, PaymentMethod,
};
use crate::booking::application::ports::outgoing::{
    BookingRepository, BookingRepositoryError, NewBooking,
};

#[derive(Clone, Debug)]
pub struct BookingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

fn db_error(e: impl ToString) -> BookingRepositoryError {
    BookingRepositoryError::DatabaseError(e.to_string())
}

fn to_domain(model: BookingModel) -> Result<Booking, BookingRepositoryError> {
    model.to_domain().map_err(BookingRepositoryError::DatabaseError)
}

fn set_ledger(active: &mut BookingActiveModel, ledger: &PaymentLedger) {
    active.paid_amount = Set(ledger.paid());
    active.pending_amount = Set(ledger.pending());
    active.payment_status = Set(ledger.status().as_str().to_string());
}

impl BookingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, booking_id: Uuid) -> Result<BookingActiveModel, BookingRepositoryError> {
        let model = BookingEntity::find_by_id(booking_id)
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(BookingRepositoryError::NotFound)?;

        Ok(model.into())
    }

    async fn save(&self, active: BookingActiveModel) -> Result<Booking, BookingRepositoryError> {
        to_domain(active.update(&*self.db).await.map_err(db_error)?)
    }
}

#[async_trait]
impl BookingRepository for BookingRepositoryPostgres {
    async fn create_booking(&self, data: NewBooking) -> Result<Booking, BookingRepositoryError> {
        let window = data.window;
        let mut active = BookingActiveModel {
            id: Set(Uuid::new_v4()),
            bike_id: Set(data.bike_id),
            user_id: Set(data.user_id.value()),
            owner_id: Set(data.owner_id.value()),
            pickup_date: Set(window.pickup_date()),
            return_date: Set(window.return_date()),
            pickup_slot: Set(window.pickup_slot().to_string()),
            return_slot: Set(window.return_slot().to_string()),
            pickup_at: Set(window.pickup_at()),
            return_at: Set(window.return_at()),
            total_hours: Set(data.total_hours),
            price: Set(data.ledger.price()),
            status: Set(BookingStatus::Pending.as_str().to_string()),
            payment_method: Set(data.payment_method.as_str().to_string()),
            paid_amount: NotSet,
            pending_amount: NotSet,
            payment_status: NotSet,
            hub_id: Set(data.hub_id),
            address: Set(data.address),
            phone: Set(data.phone),
            pickup_location: Set(data.pickup_location),
            gateway_payment_id: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };
        set_ledger(&mut active, &data.ledger);

        to_domain(active.insert(&*self.db).await.map_err(db_error)?)
    }

    async fn update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
        ledger: PaymentLedger,
    ) -> Result<Booking, BookingRepositoryError> {
        let mut active = self.load(booking_id).await?;
        active.status = Set(status.as_str().to_string());
        set_ledger(&mut active, &ledger);
        self.save(active).await
    }

    async fn record_payment(
        &self,
        booking_id: Uuid,
        ledger: PaymentLedger,
        gateway_payment_id: Option<String>,
    ) -> Result<Booking, BookingRepositoryError> {
        let mut active = self.load(booking_id).await?;
        set_ledger(&mut active, &ledger);
        active.payment_method = Set(PaymentMethod::Online.as_str().to_string());
        if let Some(id) = gateway_payment_id {
            active.gateway_payment_id = Set(Some(id));
        }
        self.save(active).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::booking::application::domain::{BookingWindow, PaymentStatus};
    use chrono::{NaiveDate, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(id: Uuid, status: &str, paid: i64, payment_status: &str) -> BookingModel {
        let now = Utc::now().fixed_offset();
        let d = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        BookingModel {
            id,
            bike_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            pickup_date: d,
            return_date: d,
            pickup_slot: "09:00".into(),
            return_slot: "11:00".into(),
            pickup_at: d.and_hms_opt(9, 0, 0).unwrap(),
            return_at: d.and_hms_opt(11, 0, 0).unwrap(),
            total_hours: 2,
            price: 200,
            status: status.into(),
            payment_method: "offline".into(),
            paid_amount: paid,
            pending_amount: 200 - paid,
            payment_status: payment_status.into(),
            hub_id: None,
            address: None,
            phone: None,
            pickup_location: None,
            gateway_payment_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_booking_returns_stored_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(id, "pending", 50, "partial")]])
            .into_connection();
        let d = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        let booking = BookingRepositoryPostgres::new(Arc::new(db))
            .create_booking(NewBooking {
                bike_id: Uuid::new_v4(),
                user_id: UserId::from(Uuid::new_v4()),
                owner_id: UserId::from(Uuid::new_v4()),
                window: BookingWindow::new(d, "09:00", d, "11:00").unwrap(),
                total_hours: 2,
                ledger: PaymentLedger::open(200, 50).unwrap(),
                payment_method: PaymentMethod::Offline,
                hub_id: None,
                address: None,
                phone: None,
                pickup_location: None,
            })
            .await
            .unwrap();

        assert_eq!(booking.id, id);
        assert_eq!(booking.payment_status, PaymentStatus::Partial);
    }

    #[tokio::test]
    async fn update_status_of_missing_booking_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BookingModel>::new()])
            .into_connection();

        let result = BookingRepositoryPostgres::new(Arc::new(db))
            .update_status(
                Uuid::new_v4(),
                BookingStatus::Confirmed,
                PaymentLedger::open(200, 0).unwrap(),
            )
            .await;

        assert!(matches!(result, Err(BookingRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn record_payment_returns_updated_row() {
        let id = Uuid::new_v4();
        let mut paid = model(id, "confirmed", 200, "paid");
        paid.payment_method = "online".into();
        paid.gateway_payment_id = Some("pay_9".into());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(id, "confirmed", 50, "partial")]])
            .append_query_results([vec![paid]])
            .into_connection();

        let booking = BookingRepositoryPostgres::new(Arc::new(db))
            .record_payment(
                id,
                PaymentLedger::open(200, 50).unwrap().top_up(150).unwrap(),
                Some("pay_9".into()),
            )
            .await
            .unwrap();

        assert_eq!(booking.payment_status, PaymentStatus::Paid);
        assert_eq!(booking.payment_method, PaymentMethod::Online);
        assert_eq!(booking.gateway_payment_id.as_deref(), Some("pay_9"));
    }
}
