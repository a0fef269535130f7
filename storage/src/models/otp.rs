use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// An OTP issued for a phone number; the most recent row per phone is the
/// one checked at registration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OtpChallenge {
    pub otp_id: i64,
    pub phone: String,
    pub code: String,
    pub expires_at: chrono::NaiveDateTime,
    pub created_at: chrono::NaiveDateTime,
}
