use chrono::NaiveDateTime;
use sqlx::PgPool;
use storage::{
    dto::score::SaveScoreRequest,
    error::Result,
    models::ScoreEvent,
    services::{public_id::PublicIdCodec, submission},
};

/// Validate and append one score submission
///
/// The range check runs before the opaque id is resolved, so an out-of-range
/// score is reported even when the id itself is bad.
pub async fn save_score(
    pool: &PgPool,
    ids: &PublicIdCodec,
    request: &SaveScoreRequest,
    now: NaiveDateTime,
) -> Result<ScoreEvent> {
    submission::validate_score(request.score)?;
    let user_id = ids.decode(&request.user_id)?;

    submission::record_score(pool, user_id, request.score, now).await
}
