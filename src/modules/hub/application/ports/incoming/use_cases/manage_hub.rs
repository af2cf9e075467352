use async_trait::async_trait;
use uuid::Uuid;

use super::HubError;
use crate::auth::application::domain::entities::UserId;
use crate::hub::application::domain::entities::{
    normalize_optional, require_text, validate_capacity, validate_hours, Hub, HubStatus,
    HubValidationError, DEFAULT_CLOSE_TIME, DEFAULT_OPEN_TIME,
};
use crate::hub::application::ports::outgoing::{CreateHubData, HubPatch};
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct CreateHubInput {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub capacity: Option<i32>,
    pub status: Option<HubStatus>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateHubCommand {
    data: CreateHubData,
}

impl CreateHubCommand {
    pub fn new(owner: UserId, input: CreateHubInput) -> Result<Self, HubValidationError> {
        let open_time = input
            .open_time
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| DEFAULT_OPEN_TIME.to_string());
        let close_time = input
            .close_time
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| DEFAULT_CLOSE_TIME.to_string());
        validate_hours(&open_time, &close_time)?;

        let data = CreateHubData {
            owner,
            name: require_text("name", input.name)?,
            address: require_text("address", input.address)?,
            city: require_text("city", input.city)?,
            state: require_text("state", input.state)?,
            pincode: require_text("pincode", input.pincode)?,
            phone: normalize_optional(input.phone),
            email: normalize_optional(input.email).map(|e| e.to_lowercase()),
            capacity: validate_capacity(input.capacity.unwrap_or(0))?,
            status: input.status.unwrap_or_default(),
            open_time,
            close_time,
        };

        Ok(Self { data })
    }

    pub fn owner(&self) -> UserId {
        self.data.owner
    }

    pub fn into_data(self) -> CreateHubData {
        self.data
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateHubInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub phone: PatchField<String>,
    pub email: PatchField<String>,
    pub capacity: Option<i32>,
    pub status: Option<HubStatus>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
}

/// Field-level validation. Opening hours are re-checked against the stored hub
/// once the patch is merged.
#[derive(Debug, Clone)]
pub struct UpdateHubCommand {
    patch: HubPatch,
}

impl UpdateHubCommand {
    pub fn new(input: UpdateHubInput) -> Result<Self, HubValidationError> {
        let text = |field: &'static str, value: Option<String>| {
            value.map(|v| require_text(field, v)).transpose()
        };
        let contact = |value: PatchField<String>| match value {
            PatchField::Value(v) => match normalize_optional(Some(v)) {
                Some(v) => PatchField::Value(v),
                None => PatchField::Null,
            },
            other => other,
        };

        let patch = HubPatch {
            name: text("name", input.name)?,
            address: text("address", input.address)?,
            city: text("city", input.city)?,
            state: text("state", input.state)?,
            pincode: text("pincode", input.pincode)?,
            phone: contact(input.phone),
            email: contact(input.email).map(|e| e.to_lowercase()),
            capacity: input.capacity.map(validate_capacity).transpose()?,
            status: input.status,
            open_time: input.open_time.map(|t| t.trim().to_string()),
            close_time: input.close_time.map(|t| t.trim().to_string()),
        };

        Ok(Self { patch })
    }

    pub fn into_patch(self) -> HubPatch {
        self.patch
    }
}

#[async_trait]
pub trait CreateHubUseCase: Send + Sync {
    async fn execute(&self, command: CreateHubCommand) -> Result<Hub, HubError>;
}

/// The caller's hubs only
#[async_trait]
pub trait ListHubsUseCase: Send + Sync {
    async fn execute(&self, caller: UserId) -> Result<Vec<Hub>, HubError>;
}

/// Hubs of other owners are reported as not found
#[async_trait]
pub trait GetHubUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, hub_id: Uuid) -> Result<Hub, HubError>;
}

#[async_trait]
pub trait UpdateHubUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: UserId,
        hub_id: Uuid,
        command: UpdateHubCommand,
    ) -> Result<Hub, HubError>;
}

#[async_trait]
pub trait DeleteHubUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, hub_id: Uuid) -> Result<(), HubError>;
}
