use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::OtpChallenge;

pub struct OtpRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OtpRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a freshly issued OTP for a phone number
    pub async fn create(
        &self,
        phone: &str,
        code: &str,
        expires_at: NaiveDateTime,
    ) -> Result<OtpChallenge> {
        let otp = sqlx::query_as::<_, OtpChallenge>(
            r#"
            INSERT INTO otps (phone, code, expires_at)
            VALUES ($1, $2, $3)
            RETURNING otp_id, phone, code, expires_at, created_at
            "#,
        )
        .bind(phone)
        .bind(code)
        .bind(expires_at)
        .fetch_one(self.pool)
        .await?;

        Ok(otp)
    }

    /// Most recently issued OTP for a phone, if any
    pub async fn latest_for_phone(&self, phone: &str) -> Result<Option<OtpChallenge>> {
        let otp = sqlx::query_as::<_, OtpChallenge>(
            r#"
            SELECT otp_id, phone, code, expires_at, created_at
            FROM otps
            WHERE phone = $1
            ORDER BY otp_id DESC
            LIMIT 1
            "#,
        )
        .bind(phone)
        .fetch_optional(self.pool)
        .await?;

        Ok(otp)
    }
}
