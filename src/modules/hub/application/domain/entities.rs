use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const DEFAULT_OPEN_TIME: &str = "09:00";
pub const DEFAULT_CLOSE_TIME: &str = "18:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum HubStatus {
    #[default]
    Active,
    Inactive,
}

impl HubStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HubStatus::Active => "active",
            HubStatus::Inactive => "inactive",
        }
    }

    /// Anything unrecognised is treated as inactive
    pub fn from_db(value: &str) -> Self {
        match value {
            "active" => HubStatus::Active,
            _ => HubStatus::Inactive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Hub {
    pub id: Uuid,
    pub owner_id: UserId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub capacity: i32,
    pub status: HubStatus,
    #[schema(example = "09:00")]
    pub open_time: String,
    #[schema(example = "18:00")]
    pub close_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hub {
    pub fn is_active(&self) -> bool {
        self.status == HubStatus::Active
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HubValidationError {
    #[error("{0} is required")]
    EmptyField(&'static str),

    #[error("Capacity cannot be negative")]
    NegativeCapacity,

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Opening time must be before closing time")]
    ClosesBeforeOpening,
}

pub fn require_text(field: &'static str, value: String) -> Result<String, HubValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HubValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Blank optional contact fields are stored as absent
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn validate_capacity(capacity: i32) -> Result<i32, HubValidationError> {
    if capacity < 0 {
        return Err(HubValidationError::NegativeCapacity);
    }
    Ok(capacity)
}

/// Strict two-digit `HH:MM`
pub fn parse_clock(value: &str) -> Result<NaiveTime, HubValidationError> {
    let invalid = || HubValidationError::InvalidTime(value.to_string());
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| invalid())
}

pub fn validate_hours(open: &str, close: &str) -> Result<(), HubValidationError> {
    if parse_clock(open)? >= parse_clock(close)? {
        return Err(HubValidationError::ClosesBeforeOpening);
    }
    Ok(())
}
