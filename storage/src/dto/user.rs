use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for issuing an OTP
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendOtpRequest {
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

/// Request payload for registering a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub dob: Option<NaiveDate>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "OTP is required"))]
    pub otp: String,
}

/// Response carrying the freshly registered user's opaque id
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub user_id: String,
}

// Validation helper
fn validate_phone(phone: &str) -> Result<(), validator::ValidationError> {
    if phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_phone"))
    }
}
