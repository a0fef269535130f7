use sqlx::PgPool;
use storage::{
    dto::ranking::{ScorecardResponse, WeeklyScoreEntry},
    error::{Result, StorageError},
    repository::{score::ScoreRepository, user::UserRepository},
    services::ranking,
};

/// Global scorecard for one user: cumulative total and rank
pub async fn scorecard(pool: &PgPool, user_id: i64) -> Result<ScorecardResponse> {
    let user = UserRepository::new(pool).find_by_id(user_id).await?;

    let totals = ScoreRepository::new(pool).cumulative_totals().await?;
    let ranked = ranking::global_rank(user_id, &totals).ok_or(StorageError::UnknownUser)?;

    Ok(ScorecardResponse {
        name: user.name,
        total_score: ranked.total_score,
        rank: ranked.rank,
    })
}

/// Week-by-week standings for one user
pub async fn weekly_score(pool: &PgPool, user_id: i64) -> Result<Vec<WeeklyScoreEntry>> {
    UserRepository::new(pool).find_by_id(user_id).await?;

    let scores = ScoreRepository::new(pool);
    let own_events = scores.events_for_user(user_id).await?;
    if own_events.is_empty() {
        return Ok(Vec::new());
    }

    let events = scores.all_events().await?;

    Ok(ranking::weekly_history(user_id, &events))
}
