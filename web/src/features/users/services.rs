use chrono::{Duration, NaiveDateTime};
use sqlx::PgPool;
use storage::{
    dto::user::RegisterRequest,
    error::{Result, StorageError},
    repository::{otp::OtpRepository, user::UserRepository},
    services::public_id::PublicIdCodec,
};

/// Fixed code until an SMS gateway is wired in.
pub const OTP_CODE: &str = "1234";

const OTP_TTL_MINUTES: i64 = 1;

/// Issue a short-lived OTP for a phone number
pub async fn send_otp(pool: &PgPool, phone: &str, now: NaiveDateTime) -> Result<()> {
    let repo = OtpRepository::new(pool);
    repo.create(phone, OTP_CODE, now + Duration::minutes(OTP_TTL_MINUTES))
        .await?;

    Ok(())
}

/// Verify the latest OTP for the phone and create the account
pub async fn register(
    pool: &PgPool,
    ids: &PublicIdCodec,
    request: &RegisterRequest,
    now: NaiveDateTime,
) -> Result<String> {
    let users = UserRepository::new(pool);
    if users.phone_exists(&request.phone).await? {
        return Err(StorageError::PhoneAlreadyRegistered);
    }

    let otp = OtpRepository::new(pool)
        .latest_for_phone(&request.phone)
        .await?
        .ok_or(StorageError::InvalidOtp)?;
    if otp.code != request.otp || otp.expires_at < now {
        return Err(StorageError::InvalidOtp);
    }

    let user = users
        .create(
            &request.phone,
            &request.name,
            request.dob,
            request.email.as_deref(),
        )
        .await?;

    Ok(ids.encode(user.user_id))
}
