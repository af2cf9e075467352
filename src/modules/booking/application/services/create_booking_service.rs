use async_trait::async_trait;

use super::availability_service::{blocked_bikes, live_bookings};
use crate::auth::application::helpers::RoleGuard;
use crate::bike::application::ports::outgoing::BikeQuery;
use crate::booking::application::domain::{quote, Booking, PaymentLedger, WindowError};
use crate::booking::application::ports::{
    incoming::use_cases::{BookingError, CreateBookingCommand, CreateBookingUseCase},
    outgoing::{BookingQuery, BookingRepository, NewBooking},
};
use crate::hub::application::ports::outgoing::HubQuery;

pub struct CreateBookingService<B, H, Q, R>
where
    B: BikeQuery + Send + Sync,
    H: HubQuery + Send + Sync,
    Q: BookingQuery + Send + Sync,
    R: BookingRepository + Send + Sync,
{
    guard: RoleGuard,
    bikes: B,
    hubs: H,
    bookings: Q,
    repository: R,
}

impl<B, H, Q, R> CreateBookingService<B, H, Q, R>
where
    B: BikeQuery + Send + Sync,
    H: HubQuery + Send + Sync,
    Q: BookingQuery + Send + Sync,
    R: BookingRepository + Send + Sync,
{
    pub fn new(guard: RoleGuard, bikes: B, hubs: H, bookings: Q, repository: R) -> Self {
        Self {
            guard,
            bikes,
            hubs,
            bookings,
            repository,
        }
    }
}

#[async_trait]
impl<B, H, Q, R> CreateBookingUseCase for CreateBookingService<B, H, Q, R>
where
    B: BikeQuery + Send + Sync,
    H: HubQuery + Send + Sync,
    Q: BookingQuery + Send + Sync,
    R: BookingRepository + Send + Sync,
{
    async fn execute(&self, command: CreateBookingCommand) -> Result<Booking, BookingError> {
        self.guard.require_active(command.renter).await?;

        let bike = self
            .bikes
            .find_by_id(command.bike_id)
            .await
            .map_err(|e| BookingError::RepositoryError(e.to_string()))?
            .ok_or(BookingError::BikeNotFound)?;
        let owner_id = bike.owner_id.ok_or(BookingError::BikeNotFound)?;
        if !bike.is_listed() {
            return Err(BookingError::BikeNotListed);
        }

        if let Some(hub_id) = command.hub_id {
            let hub = self
                .hubs
                .find_by_id(hub_id)
                .await
                .map_err(|e| BookingError::RepositoryError(e.to_string()))?
                .ok_or(BookingError::HubNotFound)?;
            if !hub.is_active() {
                return Err(BookingError::HubInactive);
            }
        }

        // Not atomic with the insert below; two concurrent checkouts can both pass.
        let window = command.window;
        let live = live_bookings(&self.bookings, &[bike.id], &window).await?;
        if !blocked_bikes(&live, &window).is_empty() {
            return Err(BookingError::BikeUnavailable);
        }

        let q = quote(&window, bike.price_per_day, bike.price_per_hour)?;
        let total_hours = i32::try_from(q.total_hours).map_err(|_| WindowError::TooLong)?;
        let ledger = PaymentLedger::open(q.price, command.paid_amount)?;

        let booking = self
            .repository
            .create_booking(NewBooking {
                bike_id: bike.id,
                user_id: command.renter,
                owner_id,
                window,
                total_hours,
                ledger,
                payment_method: command.payment_method,
                hub_id: command.hub_id,
                address: command.address,
                phone: command.phone,
                pickup_location: command.pickup_location,
            })
            .await
            .map_err(|e| BookingError::RepositoryError(e.to_string()))?;

        tracing::info!(
            "Booking {} created for bike {} by {} ({} h, price {}, paid {})",
            booking.id,
            booking.bike_id,
            booking.user_id,
            booking.total_hours,
            booking.price,
            booking.paid_amount
        );
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{UserId, UserRole};
    use crate::auth::application::helpers::AccessError;
    use crate::bike::application::domain::entities::Bike;
    use crate::booking::application::domain::{
        BookingStatus, BookingWindow, LedgerError, PaymentMethod, PaymentStatus, WindowError,
    };
    use crate::booking::application::ports::incoming::use_cases::CreateBookingInput;
    use crate::hub::application::domain::entities::{Hub, HubStatus};
    use crate::tests::support::fixtures::{bike, booking, hub, user_row};
    use crate::tests::support::stubs::{
        InMemoryBikeStore, InMemoryBookingStore, InMemoryHubStore, InMemoryUserQuery,
    };
    use chrono::NaiveDate;
    use std::sync::Arc;
    use uuid::Uuid;

    struct Fixture {
        renter: UserId,
        bike: Bike,
        hub: Hub,
        bookings: InMemoryBookingStore,
        service: CreateBookingService<
            InMemoryBikeStore,
            InMemoryHubStore,
            InMemoryBookingStore,
            InMemoryBookingStore,
        >,
    }

    fn fixture_with(mut b: Bike, blocked_user: bool, existing: Vec<Booking>) -> Fixture {
        let renter = Uuid::new_v4();
        let mut row = user_row(renter, UserRole::User);
        row.is_blocked = blocked_user;
        let guard = RoleGuard::new(Arc::new(InMemoryUserQuery::with_users(vec![row])));

        b.price_per_day = 100;
        let owner = b.owner_id.unwrap_or_else(|| UserId::from(Uuid::new_v4()));
        let h = hub(owner);
        let bookings = InMemoryBookingStore::with_bookings(existing);
        let service = CreateBookingService::new(
            guard,
            InMemoryBikeStore::with_bikes(vec![b.clone()]),
            InMemoryHubStore::with_hubs(vec![h.clone()]),
            bookings.clone(),
            bookings.clone(),
        );

        Fixture {
            renter: UserId::from(renter),
            bike: b,
            hub: h,
            bookings,
            service,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(bike(UserId::from(Uuid::new_v4()), 100), false, vec![])
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    fn input(bike_id: Uuid, from: (u32, &str), to: (u32, &str)) -> CreateBookingInput {
        CreateBookingInput {
            bike_id,
            pickup_date: day(from.0),
            pickup_slot: from.1.into(),
            return_date: day(to.0),
            return_slot: to.1.into(),
            paid_amount: None,
            payment_method: None,
            hub_id: None,
            address: None,
            phone: None,
            pickup_location: None,
        }
    }

    fn command(renter: UserId, input: CreateBookingInput) -> CreateBookingCommand {
        CreateBookingCommand::new(renter, input).unwrap()
    }

    #[tokio::test]
    async fn two_days_at_100_cost_200() {
        let f = fixture();
        let cmd = command(f.renter, input(f.bike.id, (1, "10:00"), (3, "10:00")));

        let created = f.service.execute(cmd).await.unwrap();

        assert_eq!(created.price, 200);
        assert_eq!(created.total_hours, 48);
        assert_eq!(created.owner_id, f.bike.owner_id.unwrap());
        assert_eq!(created.status, BookingStatus::Pending);
        assert_eq!(created.payment_status, PaymentStatus::Unpaid);
        assert_eq!(created.pending_amount, 200);
        assert_eq!(f.bookings.get(created.id), Some(created));
    }

    #[tokio::test]
    async fn deposit_splits_the_price() {
        let f = fixture();
        let mut i = input(f.bike.id, (1, "10:00"), (2, "10:00"));
        i.paid_amount = Some(40);
        i.payment_method = Some(PaymentMethod::Online);
        i.hub_id = Some(f.hub.id);

        let created = f.service.execute(command(f.renter, i)).await.unwrap();

        assert_eq!(created.paid_amount, 40);
        assert_eq!(created.pending_amount, 60);
        assert_eq!(created.payment_status, PaymentStatus::Partial);
        assert_eq!(created.payment_method, PaymentMethod::Online);
        assert_eq!(created.hub_id, Some(f.hub.id));
    }

    #[tokio::test]
    async fn overpaying_deposit_is_rejected() {
        let f = fixture();
        let mut i = input(f.bike.id, (1, "10:00"), (2, "10:00"));
        i.paid_amount = Some(101);

        let result = f.service.execute(command(f.renter, i)).await;

        assert!(matches!(
            result,
            Err(BookingError::Ledger(LedgerError::PaidExceedsPrice { .. }))
        ));
    }

    #[tokio::test]
    async fn overlapping_window_is_rejected_and_adjacent_is_accepted() {
        let b = bike(UserId::from(Uuid::new_v4()), 100);
        let day1 = day(1);
        let existing = booking(
            b.id,
            BookingWindow::new(day1, "10:00", day1, "14:00").unwrap(),
            100,
        );
        let f = fixture_with(b, false, vec![existing]);

        let clash = f
            .service
            .execute(command(f.renter, input(f.bike.id, (1, "12:00"), (1, "16:00"))))
            .await;
        let adjacent = f
            .service
            .execute(command(f.renter, input(f.bike.id, (1, "14:00"), (1, "16:00"))))
            .await;

        assert!(matches!(clash, Err(BookingError::BikeUnavailable)));
        assert!(adjacent.is_ok());
    }

    #[tokio::test]
    async fn unlisted_bike_cannot_be_booked() {
        let mut b = bike(UserId::from(Uuid::new_v4()), 100);
        b.is_available = false;
        let f = fixture_with(b, false, vec![]);

        let result = f
            .service
            .execute(command(f.renter, input(f.bike.id, (1, "10:00"), (2, "10:00"))))
            .await;

        assert!(matches!(result, Err(BookingError::BikeNotListed)));
    }

    #[tokio::test]
    async fn inactive_or_unknown_hub_is_rejected() {
        let f = fixture();
        let mut unknown = input(f.bike.id, (1, "10:00"), (2, "10:00"));
        unknown.hub_id = Some(Uuid::new_v4());

        let result = f.service.execute(command(f.renter, unknown)).await;
        assert!(matches!(result, Err(BookingError::HubNotFound)));

        let mut closed_hub = hub(f.bike.owner_id.unwrap());
        closed_hub.status = HubStatus::Inactive;
        let guard_users = InMemoryUserQuery::with_users(vec![user_row(
            f.renter.value(),
            UserRole::User,
        )]);
        let service = CreateBookingService::new(
            RoleGuard::new(Arc::new(guard_users)),
            InMemoryBikeStore::with_bikes(vec![f.bike.clone()]),
            InMemoryHubStore::with_hubs(vec![closed_hub.clone()]),
            InMemoryBookingStore::default(),
            InMemoryBookingStore::default(),
        );
        let mut inactive = input(f.bike.id, (1, "10:00"), (2, "10:00"));
        inactive.hub_id = Some(closed_hub.id);

        let result = service.execute(command(f.renter, inactive)).await;
        assert!(matches!(result, Err(BookingError::HubInactive)));
    }

    #[tokio::test]
    async fn blocked_user_cannot_book() {
        let f = fixture_with(bike(UserId::from(Uuid::new_v4()), 100), true, vec![]);

        let result = f
            .service
            .execute(command(f.renter, input(f.bike.id, (1, "10:00"), (2, "10:00"))))
            .await;

        assert!(matches!(result, Err(BookingError::Access(AccessError::Blocked))));
    }

    #[tokio::test]
    async fn price_beyond_range_is_rejected_without_storing() {
        let renter = Uuid::new_v4();
        let mut b = bike(UserId::from(Uuid::new_v4()), 100);
        b.price_per_day = i64::MAX / 2;
        let bookings = InMemoryBookingStore::default();
        let service = CreateBookingService::new(
            RoleGuard::new(Arc::new(InMemoryUserQuery::with_users(vec![user_row(
                renter,
                UserRole::User,
            )]))),
            InMemoryBikeStore::with_bikes(vec![b.clone()]),
            InMemoryHubStore::default(),
            bookings.clone(),
            bookings.clone(),
        );

        let result = service
            .execute(command(UserId::from(renter), input(b.id, (1, "10:00"), (4, "10:00"))))
            .await;

        assert!(matches!(
            result,
            Err(BookingError::Window(WindowError::PriceOverflow))
        ));
        assert_eq!(bookings.count(), 0);
    }
}
