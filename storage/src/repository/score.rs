use sqlx::{FromRow, PgPool};

use crate::error::Result;
use crate::models::ScoreEvent;

/// One user's cumulative total within a ranking snapshot.
#[derive(Debug, Clone, FromRow)]
pub struct UserTotal {
    pub user_id: i64,
    pub total_score: i64,
}

pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Cumulative totals for every registered user, users without events
    /// included at zero, enumerated in registration order (the tiebreak
    /// order for equal totals).
    pub async fn cumulative_totals(&self) -> Result<Vec<UserTotal>> {
        let totals = sqlx::query_as::<_, UserTotal>(
            r#"
            SELECT u.user_id, COALESCE(SUM(s.score), 0)::bigint AS total_score
            FROM users u
            LEFT JOIN scores s ON s.user_id = u.user_id
            GROUP BY u.user_id
            ORDER BY u.user_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(totals)
    }

    /// All score events for one user, oldest first
    pub async fn events_for_user(&self, user_id: i64) -> Result<Vec<ScoreEvent>> {
        let events = sqlx::query_as::<_, ScoreEvent>(
            r#"
            SELECT score_id, user_id, score, created_at
            FROM scores
            WHERE user_id = $1
            ORDER BY score_id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Every score event in insertion order; weekly snapshots are built from
    /// this read, so first-appearance tiebreaks follow submission order.
    pub async fn all_events(&self) -> Result<Vec<ScoreEvent>> {
        let events = sqlx::query_as::<_, ScoreEvent>(
            r#"
            SELECT score_id, user_id, score, created_at
            FROM scores
            ORDER BY score_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }
}
