use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A registered participant.
///
/// `user_id` is the internal sequential id and never crosses the HTTP
/// boundary; the outside world only ever sees the opaque token produced by
/// the public-id codec.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: i64,
    pub phone: String,
    pub name: String,
    pub dob: Option<chrono::NaiveDate>,
    pub email: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
