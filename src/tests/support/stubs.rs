use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId, UserRole};
use crate::auth::application::ports::outgoing::token_provider::{ACCESS_TOKEN, REFRESH_TOKEN};
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, TokenClaims, TokenError, TokenProvider, UserQuery,
    UserQueryError, UserQueryResult, UserRepository, UserRepositoryError,
};
use crate::bike::application::domain::entities::Bike;
use crate::bike::application::ports::outgoing::{
    BikePatch, BikeQuery, BikeQueryError, BikeRepository, BikeRepositoryError, CreateBikeData,
};
use crate::booking::application::domain::{
    Booking, BookingStatus, PaymentLedger, PaymentMethod,
};
use crate::booking::application::ports::outgoing::{
    BookingQuery, BookingQueryError, BookingRepository, BookingRepositoryError, NewBooking,
};
use crate::hub::application::domain::entities::Hub;
use crate::hub::application::ports::outgoing::{
    CreateHubData, HubQuery, HubQueryError, HubRepository, HubRepositoryError,
};
use crate::payment::application::domain::{OrderRequest, PaymentOrder};
use crate::payment::application::ports::outgoing::{GatewayError, PaymentGateway};

// ──── Auth ────

#[derive(Clone, Default)]
pub struct InMemoryUserQuery {
    users: Arc<Vec<UserQueryResult>>,
}

impl InMemoryUserQuery {
    pub fn with_users(users: Vec<UserQueryResult>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}

#[async_trait]
impl UserQuery for InMemoryUserQuery {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let email = email.to_lowercase();
        Ok(self
            .users
            .iter()
            .find(|u| u.email == email && !u.is_deleted)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<UserQueryResult>, UserQueryError> {
        Ok(self
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn list_users(&self) -> Result<Vec<UserQueryResult>, UserQueryError> {
        let mut live: Vec<UserQueryResult> =
            self.users.iter().filter(|u| !u.is_deleted).cloned().collect();
        live.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(live)
    }
}

#[derive(Default)]
struct UserRepositoryLog {
    calls: usize,
    last_created: Option<CreateUserData>,
    last_blocked: Option<bool>,
}

/// Answers every write with the same canned result and records what it saw
#[derive(Clone)]
pub struct StubUserRepository {
    result: Result<User, UserRepositoryError>,
    log: Arc<Mutex<UserRepositoryLog>>,
}

impl StubUserRepository {
    pub fn returning(result: Result<User, UserRepositoryError>) -> Self {
        Self {
            result,
            log: Arc::new(Mutex::new(UserRepositoryLog::default())),
        }
    }

    pub fn calls(&self) -> usize {
        self.log.lock().unwrap().calls
    }

    pub fn last_created(&self) -> Option<CreateUserData> {
        self.log.lock().unwrap().last_created.clone()
    }

    pub fn last_blocked(&self) -> Option<bool> {
        self.log.lock().unwrap().last_blocked
    }

    fn record(&self, f: impl FnOnce(&mut UserRepositoryLog)) -> Result<User, UserRepositoryError> {
        let mut log = self.log.lock().unwrap();
        log.calls += 1;
        if self.result.is_ok() {
            f(&mut log);
        }
        self.result.clone()
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        self.record(|log| log.last_created = Some(data))
    }

    async fn set_role(&self, _user_id: Uuid, _role: UserRole) -> Result<User, UserRepositoryError> {
        self.record(|_| {})
    }

    async fn set_image(&self, _user_id: Uuid, _image: String) -> Result<User, UserRepositoryError> {
        self.record(|_| {})
    }

    async fn set_blocked(
        &self,
        _user_id: Uuid,
        blocked: bool,
    ) -> Result<User, UserRepositoryError> {
        self.record(|log| log.last_blocked = Some(blocked))
    }

    async fn soft_delete_user(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.record(|_| {}).map(|_| ())
    }
}

/// Tokens are readable strings: `access:<uuid>` and `refresh:<uuid>`
#[derive(Clone, Default)]
pub struct StubTokenProvider;

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("{ACCESS_TOKEN}:{user_id}"))
    }

    fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("{REFRESH_TOKEN}:{user_id}"))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (kind, raw_id) = token.split_once(':').ok_or(TokenError::MalformedToken)?;
        if kind != ACCESS_TOKEN && kind != REFRESH_TOKEN {
            return Err(TokenError::MalformedToken);
        }
        let sub = Uuid::parse_str(raw_id).map_err(|_| TokenError::MalformedToken)?;
        let now = Utc::now().timestamp();

        Ok(TokenClaims {
            sub,
            exp: now + 3600,
            iat: now,
            nbf: now,
            iss: "test".to_string(),
            token_type: kind.to_string(),
        })
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;
        if claims.token_type != REFRESH_TOKEN {
            return Err(TokenError::InvalidTokenType(REFRESH_TOKEN.to_string()));
        }
        self.generate_access_token(claims.sub)
    }
}

/// Reversible "hash" so tests never pay for argon2
#[derive(Clone, Default)]
pub struct StubPasswordHasher;

#[async_trait]
impl PasswordHasher for StubPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash.strip_prefix("hashed:") == Some(password))
    }
}

// ──── Bikes ────

#[derive(Clone, Default)]
pub struct InMemoryBikeStore {
    bikes: Arc<Mutex<HashMap<Uuid, Bike>>>,
}

impl InMemoryBikeStore {
    pub fn with_bikes(bikes: Vec<Bike>) -> Self {
        Self {
            bikes: Arc::new(Mutex::new(bikes.into_iter().map(|b| (b.id, b)).collect())),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<Bike> {
        self.bikes.lock().unwrap().get(&id).cloned()
    }

    fn newest_first(&self, keep: impl Fn(&Bike) -> bool) -> Vec<Bike> {
        let mut bikes: Vec<Bike> = self
            .bikes
            .lock()
            .unwrap()
            .values()
            .filter(|b| keep(b))
            .cloned()
            .collect();
        bikes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        bikes
    }

    fn modify(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Bike),
    ) -> Result<Bike, BikeRepositoryError> {
        let mut bikes = self.bikes.lock().unwrap();
        let bike = bikes.get_mut(&id).ok_or(BikeRepositoryError::NotFound)?;
        f(bike);
        bike.updated_at = Utc::now();
        Ok(bike.clone())
    }
}

#[async_trait]
impl BikeQuery for InMemoryBikeStore {
    async fn find_by_id(&self, bike_id: Uuid) -> Result<Option<Bike>, BikeQueryError> {
        Ok(self.get(bike_id))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Bike>, BikeQueryError> {
        Ok(self.newest_first(|b| ids.contains(&b.id)))
    }

    async fn list_listed(&self) -> Result<Vec<Bike>, BikeQueryError> {
        Ok(self.newest_first(Bike::is_listed))
    }

    async fn list_listed_by_location(&self, location: &str) -> Result<Vec<Bike>, BikeQueryError> {
        let location = location.trim();
        Ok(self.newest_first(|b| b.is_listed() && b.location == location))
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Bike>, BikeQueryError> {
        Ok(self.newest_first(|b| b.is_owned_by(owner)))
    }

    async fn count_by_owner(&self, owner: UserId) -> Result<u64, BikeQueryError> {
        Ok(self.newest_first(|b| b.is_owned_by(owner)).len() as u64)
    }
}

#[async_trait]
impl BikeRepository for InMemoryBikeStore {
    async fn create_bike(&self, data: CreateBikeData) -> Result<Bike, BikeRepositoryError> {
        let now = Utc::now();
        let bike = Bike {
            id: Uuid::new_v4(),
            owner_id: Some(data.owner),
            brand: data.brand,
            model: data.model,
            image: data.image,
            year: data.year,
            category: data.category,
            seating_capacity: data.seating_capacity,
            fuel_type: data.fuel_type,
            transmission: data.transmission,
            price_per_day: data.price_per_day,
            price_per_hour: data.price_per_hour,
            location: data.location,
            description: data.description,
            is_available: true,
            created_at: now,
            updated_at: now,
        };
        self.bikes.lock().unwrap().insert(bike.id, bike.clone());
        Ok(bike)
    }

    async fn update_bike(
        &self,
        bike_id: Uuid,
        patch: BikePatch,
    ) -> Result<Bike, BikeRepositoryError> {
        self.modify(bike_id, |bike| patch.apply(bike))
    }

    async fn set_availability(
        &self,
        bike_id: Uuid,
        available: bool,
    ) -> Result<Bike, BikeRepositoryError> {
        self.modify(bike_id, |bike| bike.is_available = available)
    }

    async fn detach_owner(&self, bike_id: Uuid) -> Result<(), BikeRepositoryError> {
        self.modify(bike_id, |bike| {
            bike.owner_id = None;
            bike.is_available = false;
        })
        .map(|_| ())
    }
}

// ──── Hubs ────

#[derive(Clone, Default)]
pub struct InMemoryHubStore {
    hubs: Arc<Mutex<HashMap<Uuid, Hub>>>,
}

impl InMemoryHubStore {
    pub fn with_hubs(hubs: Vec<Hub>) -> Self {
        Self {
            hubs: Arc::new(Mutex::new(hubs.into_iter().map(|h| (h.id, h)).collect())),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<Hub> {
        self.hubs.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl HubQuery for InMemoryHubStore {
    async fn find_by_id(&self, hub_id: Uuid) -> Result<Option<Hub>, HubQueryError> {
        Ok(self.get(hub_id))
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Hub>, HubQueryError> {
        let mut hubs: Vec<Hub> = self
            .hubs
            .lock()
            .unwrap()
            .values()
            .filter(|h| h.is_owned_by(owner))
            .cloned()
            .collect();
        hubs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(hubs)
    }
}

#[async_trait]
impl HubRepository for InMemoryHubStore {
    async fn create_hub(&self, data: CreateHubData) -> Result<Hub, HubRepositoryError> {
        let now = Utc::now();
        let hub = Hub {
            id: Uuid::new_v4(),
            owner_id: data.owner,
            name: data.name,
            address: data.address,
            city: data.city,
            state: data.state,
            pincode: data.pincode,
            phone: data.phone,
            email: data.email,
            capacity: data.capacity,
            status: data.status,
            open_time: data.open_time,
            close_time: data.close_time,
            created_at: now,
            updated_at: now,
        };
        self.hubs.lock().unwrap().insert(hub.id, hub.clone());
        Ok(hub)
    }

    async fn save_hub(&self, hub: &Hub) -> Result<Hub, HubRepositoryError> {
        let mut hubs = self.hubs.lock().unwrap();
        let stored = hubs.get_mut(&hub.id).ok_or(HubRepositoryError::NotFound)?;
        *stored = hub.clone();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete_hub(&self, hub_id: Uuid) -> Result<(), HubRepositoryError> {
        self.hubs
            .lock()
            .unwrap()
            .remove(&hub_id)
            .map(|_| ())
            .ok_or(HubRepositoryError::NotFound)
    }
}

// ──── Bookings ────

#[derive(Clone, Default)]
pub struct InMemoryBookingStore {
    bookings: Arc<Mutex<HashMap<Uuid, Booking>>>,
}

impl InMemoryBookingStore {
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Arc::new(Mutex::new(
                bookings.into_iter().map(|b| (b.id, b)).collect(),
            )),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<Booking> {
        self.bookings.lock().unwrap().get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }

    fn newest_first(&self, keep: impl Fn(&Booking) -> bool) -> Vec<Booking> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .lock()
            .unwrap()
            .values()
            .filter(|b| keep(b))
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        bookings
    }

    fn modify(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Booking),
    ) -> Result<Booking, BookingRepositoryError> {
        let mut bookings = self.bookings.lock().unwrap();
        let booking = bookings
            .get_mut(&id)
            .ok_or(BookingRepositoryError::NotFound)?;
        f(booking);
        booking.updated_at = Utc::now();
        Ok(booking.clone())
    }
}

#[async_trait]
impl BookingQuery for InMemoryBookingStore {
    async fn find_by_id(&self, booking_id: Uuid) -> Result<Option<Booking>, BookingQueryError> {
        Ok(self.get(booking_id))
    }

    async fn list_live_for_bikes(
        &self,
        bike_ids: &[Uuid],
        ends_after: NaiveDateTime,
    ) -> Result<Vec<Booking>, BookingQueryError> {
        Ok(self.newest_first(|b| {
            bike_ids.contains(&b.bike_id) && b.status.is_live() && b.return_at > ends_after
        }))
    }

    async fn list_by_user(&self, user: UserId) -> Result<Vec<Booking>, BookingQueryError> {
        Ok(self.newest_first(|b| b.user_id == user))
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Booking>, BookingQueryError> {
        Ok(self.newest_first(|b| b.owner_id == owner))
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingStore {
    async fn create_booking(&self, data: NewBooking) -> Result<Booking, BookingRepositoryError> {
        let now = Utc::now();
        let window = data.window;
        let mut booking = Booking {
            id: Uuid::new_v4(),
            bike_id: data.bike_id,
            user_id: data.user_id,
            owner_id: data.owner_id,
            pickup_date: window.pickup_date(),
            return_date: window.return_date(),
            pickup_slot: window.pickup_slot().to_string(),
            return_slot: window.return_slot().to_string(),
            pickup_at: window.pickup_at(),
            return_at: window.return_at(),
            total_hours: data.total_hours,
            price: data.ledger.price(),
            status: BookingStatus::Pending,
            payment_method: data.payment_method,
            paid_amount: 0,
            pending_amount: 0,
            payment_status: data.ledger.status(),
            hub_id: data.hub_id,
            address: data.address,
            phone: data.phone,
            pickup_location: data.pickup_location,
            gateway_payment_id: None,
            created_at: now,
            updated_at: now,
        };
        booking.apply_ledger(data.ledger);
        self.bookings
            .lock()
            .unwrap()
            .insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
        ledger: PaymentLedger,
    ) -> Result<Booking, BookingRepositoryError> {
        self.modify(booking_id, |booking| {
            booking.status = status;
            booking.apply_ledger(ledger);
        })
    }

    async fn record_payment(
        &self,
        booking_id: Uuid,
        ledger: PaymentLedger,
        gateway_payment_id: Option<String>,
    ) -> Result<Booking, BookingRepositoryError> {
        self.modify(booking_id, |booking| {
            booking.apply_ledger(ledger);
            booking.payment_method = PaymentMethod::Online;
            if let Some(id) = gateway_payment_id {
                booking.gateway_payment_id = Some(id);
            }
        })
    }
}

// ──── Payment ────

/// Gateway that is never reachable
#[derive(Clone, Default)]
pub struct OfflineGateway;

#[async_trait]
impl PaymentGateway for OfflineGateway {
    async fn create_order(&self, _request: OrderRequest) -> Result<PaymentOrder, GatewayError> {
        Err(GatewayError::Transport("gateway not configured".to_string()))
    }
}
