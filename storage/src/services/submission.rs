use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::ScoreEvent;

/// Inclusive bounds on a single submitted score.
pub const MIN_SCORE: i32 = 50;
pub const MAX_SCORE: i32 = 500;

/// Accepted submissions per user per calendar day.
pub const DAILY_SUBMISSION_LIMIT: i64 = 3;

/// Range gate on the submitted value; both bounds are accepted.
///
/// Called before the user id is even resolved, so an out-of-range score is
/// reported as such regardless of who submitted it.
pub fn validate_score(score: i32) -> Result<()> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(StorageError::ScoreOutOfRange(score))
    }
}

/// Daily cap over the number of events already accepted today.
pub fn check_daily_limit(submitted_today: i64) -> Result<()> {
    if submitted_today >= DAILY_SUBMISSION_LIMIT {
        Err(StorageError::DailyLimitReached)
    } else {
        Ok(())
    }
}

/// Append one score event for `user_id`, enforcing the daily cap.
///
/// The count and the insert run in a single transaction that holds the
/// user's row lock, so concurrent submissions for one user serialize and a
/// fourth same-day event can never commit. `now` comes from the caller and
/// its calendar date defines "today"; a rejection leaves no trace in the
/// store.
pub async fn record_score(
    pool: &PgPool,
    user_id: i64,
    score: i32,
    now: NaiveDateTime,
) -> Result<ScoreEvent> {
    let mut tx = pool.begin().await?;

    let locked: Option<i64> =
        sqlx::query_scalar("SELECT user_id FROM users WHERE user_id = $1 FOR UPDATE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
    if locked.is_none() {
        return Err(StorageError::UnknownUser);
    }

    let submitted_today: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM scores WHERE user_id = $1 AND created_at::date = $2",
    )
    .bind(user_id)
    .bind(now.date())
    .fetch_one(&mut *tx)
    .await?;

    check_daily_limit(submitted_today)?;

    let event = sqlx::query_as::<_, ScoreEvent>(
        r#"
        INSERT INTO scores (user_id, score, created_at)
        VALUES ($1, $2, $3)
        RETURNING score_id, user_id, score, created_at
        "#,
    )
    .bind(user_id)
    .bind(score)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(validate_score(50).is_ok());
        assert!(validate_score(500).is_ok());
        assert!(validate_score(275).is_ok());
    }

    #[test]
    fn out_of_range_scores_are_rejected() {
        assert!(matches!(
            validate_score(49),
            Err(StorageError::ScoreOutOfRange(49))
        ));
        assert!(matches!(
            validate_score(501),
            Err(StorageError::ScoreOutOfRange(501))
        ));
        assert!(matches!(
            validate_score(0),
            Err(StorageError::ScoreOutOfRange(0))
        ));
        assert!(matches!(
            validate_score(-50),
            Err(StorageError::ScoreOutOfRange(-50))
        ));
    }

    #[test]
    fn daily_limit_allows_exactly_three() {
        assert!(check_daily_limit(0).is_ok());
        assert!(check_daily_limit(1).is_ok());
        assert!(check_daily_limit(2).is_ok());
        assert!(matches!(
            check_daily_limit(3),
            Err(StorageError::DailyLimitReached)
        ));
        assert!(matches!(
            check_daily_limit(4),
            Err(StorageError::DailyLimitReached)
        ));
    }
}
