use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by internal id
    pub async fn find_by_id(&self, user_id: i64) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, phone, name, dob, email, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::UnknownUser)?;

        Ok(user)
    }

    /// Check whether a phone number is already registered
    pub async fn phone_exists(&self, phone: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE phone = $1)")
                .bind(phone)
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }

    /// Create a new user
    ///
    /// A concurrent registration for the same phone loses on the unique
    /// index and surfaces as `PhoneAlreadyRegistered`.
    pub async fn create(
        &self,
        phone: &str,
        name: &str,
        dob: Option<NaiveDate>,
        email: Option<&str>,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (phone, name, dob, email)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, phone, name, dob, email, created_at
            "#,
        )
        .bind(phone)
        .bind(name)
        .bind(dob)
        .bind(email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::PhoneAlreadyRegistered
            } else {
                err
            }
        })?;

        Ok(user)
    }
}
