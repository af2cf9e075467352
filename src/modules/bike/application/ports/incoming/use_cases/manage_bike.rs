use async_trait::async_trait;
use uuid::Uuid;

use super::BikeError;
use crate::auth::application::domain::entities::UserId;
use crate::bike::application::domain::entities::{
    require_text, validate_daily_price, validate_hourly_price, validate_seating, validate_year,
    Bike, BikeValidationError,
};
use crate::bike::application::ports::outgoing::BikePatch;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, Default)]
pub struct UpdateBikeInput {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub image: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub seating_capacity: Option<i32>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub price_per_day: Option<i64>,
    pub price_per_hour: PatchField<i64>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateBikeCommand {
    patch: BikePatch,
}

impl UpdateBikeCommand {
    /// Validates only the fields that are present
    pub fn new(input: UpdateBikeInput) -> Result<Self, BikeValidationError> {
        let text = |field: &'static str, value: Option<String>| {
            value.map(|v| require_text(field, v)).transpose()
        };

        let price_per_hour = match input.price_per_hour {
            PatchField::Value(p) => PatchField::Value(validate_hourly_price(p)?),
            other => other,
        };

        let patch = BikePatch {
            brand: text("brand", input.brand)?,
            model: text("model", input.model)?,
            image: text("image", input.image)?,
            year: input.year.map(validate_year).transpose()?,
            category: text("category", input.category)?,
            seating_capacity: input.seating_capacity.map(validate_seating).transpose()?,
            fuel_type: text("fuel_type", input.fuel_type)?,
            transmission: text("transmission", input.transmission)?,
            price_per_day: input.price_per_day.map(validate_daily_price).transpose()?,
            price_per_hour,
            location: text("location", input.location)?,
            description: input.description.map(|d| d.trim().to_string()),
        };

        Ok(Self { patch })
    }

    pub fn into_patch(self) -> BikePatch {
        self.patch
    }
}

#[async_trait]
pub trait ListOwnerBikesUseCase: Send + Sync {
    async fn execute(&self, caller: UserId) -> Result<Vec<Bike>, BikeError>;
}

#[async_trait]
pub trait UpdateBikeUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: UserId,
        bike_id: Uuid,
        command: UpdateBikeCommand,
    ) -> Result<Bike, BikeError>;
}

/// Flips `is_available` and returns the updated bike
#[async_trait]
pub trait ToggleBikeAvailabilityUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, bike_id: Uuid) -> Result<Bike, BikeError>;
}

#[async_trait]
pub trait DeleteBikeUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, bike_id: Uuid) -> Result<(), BikeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_a_no_op_patch() {
        let patch = UpdateBikeCommand::new(UpdateBikeInput::default())
            .unwrap()
            .into_patch();

        assert!(patch.brand.is_none());
        assert!(patch.price_per_hour.is_unset());
    }

    #[test]
    fn present_fields_are_validated() {
        let input = UpdateBikeInput {
            price_per_day: Some(0),
            ..Default::default()
        };

        assert_eq!(
            UpdateBikeCommand::new(input).unwrap_err(),
            BikeValidationError::InvalidDailyPrice
        );
    }

    #[test]
    fn hourly_price_can_be_cleared() {
        let input = UpdateBikeInput {
            price_per_hour: PatchField::Null,
            ..Default::default()
        };

        let patch = UpdateBikeCommand::new(input).unwrap().into_patch();

        assert_eq!(patch.price_per_hour, PatchField::Null);
    }

    #[test]
    fn blank_brand_is_rejected() {
        let input = UpdateBikeInput {
            brand: Some("  ".into()),
            ..Default::default()
        };

        assert_eq!(
            UpdateBikeCommand::new(input).unwrap_err(),
            BikeValidationError::EmptyField("brand")
        );
    }
}
