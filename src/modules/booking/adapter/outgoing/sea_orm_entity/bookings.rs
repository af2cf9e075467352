use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::booking::application::domain::{
    Booking, BookingStatus, PaymentMethod, PaymentStatus,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub bike_id: Uuid,
    pub user_id: Uuid,
    pub owner_id: Uuid,
    pub pickup_date: Date,
    pub return_date: Date,
    pub pickup_slot: String,
    pub return_slot: String,
    pub pickup_at: DateTime,
    pub return_at: DateTime,
    pub total_hours: i32,
    pub price: i64,
    pub status: String,
    pub payment_method: String,
    pub paid_amount: i64,
    pub pending_amount: i64,
    pub payment_status: String,
    pub hub_id: Option<Uuid>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub pickup_location: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Model {
    /// Fails on status strings this build does not know
    pub fn to_domain(self) -> Result<Booking, String> {
        let status = BookingStatus::from_db(&self.status)
            .ok_or_else(|| format!("unknown booking status '{}'", self.status))?;
        let payment_status = PaymentStatus::from_db(&self.payment_status)
            .ok_or_else(|| format!("unknown payment status '{}'", self.payment_status))?;

        Ok(Booking {
            id: self.id,
            bike_id: self.bike_id,
            user_id: UserId::from(self.user_id),
            owner_id: UserId::from(self.owner_id),
            pickup_date: self.pickup_date,
            return_date: self.return_date,
            pickup_slot: self.pickup_slot,
            return_slot: self.return_slot,
            pickup_at: self.pickup_at,
            return_at: self.return_at,
            total_hours: self.total_hours,
            price: self.price,
            status,
            payment_method: PaymentMethod::from_db(&self.payment_method),
            paid_amount: self.paid_amount,
            pending_amount: self.pending_amount,
            payment_status,
            hub_id: self.hub_id,
            address: self.address,
            phone: self.phone,
            pickup_location: self.pickup_location,
            gateway_payment_id: self.gateway_payment_id,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    #[cfg(feature = "no_db_triggers")]
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}
