use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A single accepted score submission.
///
/// Score events are append-only facts: once written they are never updated
/// or deleted, and every ranking view is recomputed from them on demand.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScoreEvent {
    pub score_id: i64,
    pub user_id: i64,
    pub score: i32,
    pub created_at: chrono::NaiveDateTime,
}
