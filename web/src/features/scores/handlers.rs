use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::dto::score::SaveScoreRequest;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/save-score",
    request_body = SaveScoreRequest,
    responses(
        (status = 200, description = "Score recorded"),
        (status = 400, description = "Score outside the accepted range"),
        (status = 404, description = "Unknown user"),
        (status = 429, description = "Daily submission limit reached")
    ),
    tag = "scores"
)]
pub async fn save_score(
    State(state): State<AppState>,
    Json(request): Json<SaveScoreRequest>,
) -> Result<Response, WebError> {
    let now = chrono::Local::now().naive_local();
    services::save_score(state.db.pool(), &state.ids, &request, now).await?;

    Ok(Json(json!({})).into_response())
}
