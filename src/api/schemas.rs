// Response envelopes as documented in the OpenAPI output
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every successful response
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Envelope of every failed response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// UPPER_SNAKE code clients can branch on
    #[schema(example = "BIKE_NOT_AVAILABLE")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Bike is already booked for the selected window")]
    pub message: String,
}
