use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::UserQueryResult;
use crate::bike::application::domain::entities::Bike;
use crate::booking::application::domain::{
    Booking, BookingStatus, BookingWindow, PaymentMethod, PaymentStatus,
};
use crate::hub::application::domain::entities::{Hub, HubStatus};

pub fn user_row(id: Uuid, role: UserRole) -> UserQueryResult {
    let now = Utc::now();
    UserQueryResult {
        id,
        name: "Test Rider".to_string(),
        email: format!("{}@example.com", id.simple()),
        password_hash: "$argon2id$v=19$stub".to_string(),
        role,
        is_blocked: false,
        image: None,
        is_deleted: false,
        created_at: now,
        updated_at: now,
    }
}

/// Listed bike in Bengaluru with no hourly rate
pub fn bike(owner: UserId, price_per_day: i64) -> Bike {
    let now = Utc::now();
    Bike {
        id: Uuid::new_v4(),
        owner_id: Some(owner),
        brand: "Honda".to_string(),
        model: "Activa 6G".to_string(),
        image: "https://img.example.com/activa.png".to_string(),
        year: 2023,
        category: "Scooter".to_string(),
        seating_capacity: 2,
        fuel_type: "Petrol".to_string(),
        transmission: "Automatic".to_string(),
        price_per_day,
        price_per_hour: None,
        location: "Bengaluru".to_string(),
        description: "Well kept city scooter".to_string(),
        is_available: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn hub(owner: UserId) -> Hub {
    let now = Utc::now();
    Hub {
        id: Uuid::new_v4(),
        owner_id: owner,
        name: "MG Road Hub".to_string(),
        address: "12 MG Road".to_string(),
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        pincode: "560001".to_string(),
        phone: None,
        email: None,
        capacity: 20,
        status: HubStatus::Active,
        open_time: "09:00".to_string(),
        close_time: "18:00".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Pending, unpaid booking between two random users
pub fn booking(bike_id: Uuid, window: BookingWindow, price: i64) -> Booking {
    let now = Utc::now();
    let total_hours = (window.return_at() - window.pickup_at()).num_hours() as i32;
    Booking {
        id: Uuid::new_v4(),
        bike_id,
        user_id: UserId::from(Uuid::new_v4()),
        owner_id: UserId::from(Uuid::new_v4()),
        pickup_date: window.pickup_date(),
        return_date: window.return_date(),
        pickup_slot: window.pickup_slot().to_string(),
        return_slot: window.return_slot().to_string(),
        pickup_at: window.pickup_at(),
        return_at: window.return_at(),
        total_hours,
        price,
        status: BookingStatus::Pending,
        payment_method: PaymentMethod::Offline,
        paid_amount: 0,
        pending_amount: price,
        payment_status: PaymentStatus::Unpaid,
        hub_id: None,
        address: None,
        phone: None,
        pickup_location: None,
        gateway_payment_id: None,
        created_at: now,
        updated_at: now,
    }
}
