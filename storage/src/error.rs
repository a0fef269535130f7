use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Unknown user")]
    UnknownUser,

    #[error("Score must be between 50 and 500, got {0}")]
    ScoreOutOfRange(i32),

    #[error("Score limit reached for today")]
    DailyLimitReached,

    #[error("Invalid or expired OTP")]
    InvalidOtp,

    #[error("Phone number already registered")]
    PhoneAlreadyRegistered,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }
}
