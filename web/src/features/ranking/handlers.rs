use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::ranking::{ScorecardResponse, WeeklyScoreEntry};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/scorecard/{user_id}",
    params(
        ("user_id" = String, Path, description = "Opaque user id")
    ),
    responses(
        (status = 200, description = "Cumulative total and global rank", body = ScorecardResponse),
        (status = 404, description = "Unknown user")
    ),
    tag = "ranking"
)]
pub async fn get_scorecard(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, WebError> {
    let user_id = state.ids.decode(&user_id)?;
    let response = services::scorecard(state.db.pool(), user_id).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/weekly-score/{user_id}",
    params(
        ("user_id" = String, Path, description = "Opaque user id")
    ),
    responses(
        (status = 200, description = "Per-week totals and ranks, earliest week first", body = Vec<WeeklyScoreEntry>),
        (status = 404, description = "Unknown user")
    ),
    tag = "ranking"
)]
pub async fn get_weekly_score(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, WebError> {
    let user_id = state.ids.decode(&user_id)?;
    let entries = services::weekly_score(state.db.pool(), user_id).await?;

    Ok(Json(entries).into_response())
}
